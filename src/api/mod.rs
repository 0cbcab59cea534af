// API module entry
// JSON endpoints backed by the notification log

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};

use crate::notifications::NotificationLog;

pub use handlers::TEST_MESSAGE;
pub use response::{json_response, method_not_allowed, not_found};
pub use types::{ErrorResponse, NotificationListResponse, SendNotificationResponse};

/// Path prefix owned by this module
pub const API_PREFIX: &str = "/api/";

pub const SEND_NOTIFICATION_PATH: &str = "/api/send-notification";
pub const LIST_NOTIFICATIONS_PATH: &str = "/api/notifications";

/// API route handler
///
/// Dispatches to handler functions based on request path and method.
/// A method mismatch never touches the log.
pub fn handle_api(method: &Method, path: &str, log: &NotificationLog) -> Response<Full<Bytes>> {
    match (method, path) {
        (&Method::POST, SEND_NOTIFICATION_PATH) => handlers::handle_send_notification(log),
        (_, SEND_NOTIFICATION_PATH) => method_not_allowed("POST"),
        (&Method::GET, LIST_NOTIFICATIONS_PATH) => handlers::handle_list_notifications(log),
        (_, LIST_NOTIFICATIONS_PATH) => method_not_allowed("GET"),
        _ => not_found(),
    }
}
