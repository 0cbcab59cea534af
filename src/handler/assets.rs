//! Embedded web app assets
//!
//! The installable page, its PWA manifest and the service worker are compiled
//! into the binary.

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

const INDEX_HTML: &str = include_str!("../web/index.html");
const MANIFEST_JSON: &str = include_str!("../web/manifest.json");
const SERVICE_WORKER_JS: &str = include_str!("../web/service-worker.js");

/// A static payload served at a fixed path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Index,
    Manifest,
    ServiceWorker,
}

impl Asset {
    /// Look up the asset served at `path`
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Index),
            "/manifest.json" => Some(Self::Manifest),
            "/service-worker.js" => Some(Self::ServiceWorker),
            _ => None,
        }
    }

    pub const fn content(self) -> &'static str {
        match self {
            Self::Index => INDEX_HTML,
            Self::Manifest => MANIFEST_JSON,
            Self::ServiceWorker => SERVICE_WORKER_JS,
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Index => "text/html; charset=utf-8",
            Self::Manifest => "application/json",
            Self::ServiceWorker => "application/javascript",
        }
    }

    pub fn serve(self, is_head: bool) -> Response<Full<Bytes>> {
        http::build_static_response(self.content(), self.content_type(), is_head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_is_valid_json() {
        let manifest: serde_json::Value = serde_json::from_str(MANIFEST_JSON).unwrap();
        assert_eq!(manifest["start_url"], "/");
        assert_eq!(manifest["display"], "standalone");
    }

    #[test]
    fn test_page_links_manifest_and_worker() {
        assert!(INDEX_HTML.contains(r#"<link rel="manifest" href="/manifest.json">"#));
        assert!(INDEX_HTML.contains("/service-worker.js"));
        assert!(INDEX_HTML.contains("/api/notifications"));
        assert!(INDEX_HTML.contains("/api/send-notification"));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Asset::from_path("/"), Some(Asset::Index));
        assert_eq!(Asset::from_path("/service-worker.js"), Some(Asset::ServiceWorker));
        assert_eq!(Asset::from_path("/index.html"), None);
    }
}
