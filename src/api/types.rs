// API types module
// Response bodies for the notification endpoints

use serde::{Deserialize, Serialize};

use crate::notifications::Notification;

/// Body of `POST /api/send-notification`
#[derive(Debug, Serialize, Deserialize)]
pub struct SendNotificationResponse {
    pub success: bool,
    pub notification: Notification,
    pub message: String,
}

/// Body of `GET /api/notifications`
#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
    pub count: usize,
}

impl From<Vec<Notification>> for NotificationListResponse {
    fn from(notifications: Vec<Notification>) -> Self {
        Self {
            count: notifications.len(),
            notifications,
        }
    }
}

/// Error body; the page script reads `error` on failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
