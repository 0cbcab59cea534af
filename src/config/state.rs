// Application state module
// Shared handles passed to every connection task

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use super::types::Config;
use crate::notifications::NotificationLog;

/// Application state
pub struct AppState {
    pub config: Config,
    /// The notification log, injected so tests can share or inspect it
    pub notifications: Arc<NotificationLog>,
    /// Number of connections currently being served
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: Config, notifications: Arc<NotificationLog>) -> Self {
        Self {
            config,
            notifications,
            active_connections: AtomicUsize::new(0),
        }
    }
}
