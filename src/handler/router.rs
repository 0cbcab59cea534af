//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: body size check, route matching
//! and dispatch to the embedded assets or the notification API.

use crate::api;
use crate::config::AppState;
use crate::handler::assets::Asset;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{self, HeaderValue};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

/// Methods accepted by the health check
const HEALTH_ALLOW: &str = "GET, HEAD";

/// Main entry point for HTTP request handling
///
/// Request bodies are never read, so any body type is accepted.
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    let mut resp = route_request(req.method(), req.uri().path(), &state);
    if let Ok(server_name) = HeaderValue::from_str(&state.config.http.server_name) {
        resp.headers_mut().insert(header::SERVER, server_name);
    }
    Ok(resp)
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Route request based on path, then method
fn route_request(method: &Method, path: &str, state: &AppState) -> Response<Full<Bytes>> {
    // Every method other than the endpoint's own gets 405, OPTIONS included
    if path.starts_with(api::API_PREFIX) {
        return api::handle_api(method, path, &state.notifications);
    }

    let health = &state.config.routes.health;
    if health.enabled && path == health.path {
        return match method {
            &Method::GET | &Method::HEAD => {
                api::json_response(StatusCode::OK, &serde_json::json!({ "status": "ok" }))
            }
            _ => http::build_405_response(HEALTH_ALLOW),
        };
    }

    match Asset::from_path(path) {
        Some(asset) => serve_asset(method, asset, state.config.http.enable_cors),
        None => http::build_404_response(),
    }
}

fn serve_asset(method: &Method, asset: Asset, enable_cors: bool) -> Response<Full<Bytes>> {
    match method {
        &Method::GET => asset.serve(false),
        &Method::HEAD => asset.serve(true),
        &Method::OPTIONS => http::build_options_response(http::CONTENT_ALLOW, enable_cors),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response(http::CONTENT_ALLOW)
        }
    }
}
