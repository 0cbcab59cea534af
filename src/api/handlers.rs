// Notification API handlers

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::json_response;
use super::types::{NotificationListResponse, SendNotificationResponse};
use crate::logger;
use crate::notifications::NotificationLog;

/// Message stored by every send request
pub const TEST_MESSAGE: &str = "Test Notification";

/// Record a new "sent" notification and echo it back
pub fn handle_send_notification(log: &NotificationLog) -> Response<Full<Bytes>> {
    let notification = log.append(TEST_MESSAGE);
    logger::log_notification_sent(&notification);

    json_response(
        StatusCode::OK,
        &SendNotificationResponse {
            success: true,
            notification,
            message: "Notification sent successfully".to_string(),
        },
    )
}

/// List every recorded notification with its count
pub fn handle_list_notifications(log: &NotificationLog) -> Response<Full<Bytes>> {
    let body = NotificationListResponse::from(log.snapshot());
    json_response(StatusCode::OK, &body)
}
