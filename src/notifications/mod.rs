//! Notification log module
//!
//! In-memory, append-only record of "sent" notifications shared by all
//! request handlers. Has no HTTP dependency.

mod record;
mod store;

pub use record::{Notification, STATUS_SENT};
pub use store::NotificationLog;
