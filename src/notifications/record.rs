// Notification record type

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Status tag carried by every record
pub const STATUS_SENT: &str = "sent";

/// A single notification entry, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub status: String,
    pub timestamp: DateTime<Local>,
}

impl Notification {
    /// Build a record for the given position in the log.
    ///
    /// `sequence` is the 1-based position and makes the id unique even when
    /// several records are created within the same second.
    pub(super) fn new(sequence: usize, message: String, timestamp: DateTime<Local>) -> Self {
        Self {
            id: format!("notif-{}-{sequence}", timestamp.timestamp()),
            message,
            status: STATUS_SENT.to_string(),
            timestamp,
        }
    }
}
