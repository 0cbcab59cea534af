//! Logger module
//!
//! Provides logging utilities for the server including:
//! - Startup banner and shutdown messages
//! - Access logging in several formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::notifications::Notification;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    let port = addr.port();
    write_info("\n========================================");
    write_info("🚀 Notification Server Started!");
    write_info("========================================");
    write_info(&format!("📱 Open in browser: http://localhost:{port}"));
    write_info(&format!("📱 Or use your IP: http://YOUR_IP:{port}"));
    write_info(&format!("   Listening on: {addr}"));
    if let Some(workers) = config.server.workers {
        write_info(&format!("   Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("   Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("   Error log: {path}"));
    }
    write_info("\n💡 Setup Instructions:");
    write_info("1. Open the URL in your mobile browser");
    write_info("2. Click 'Install App' or 'Add to Home Screen'");
    write_info("3. Allow notifications when prompted");
    write_info("4. Notifications will appear in your notification bar!");
    write_info("========================================\n");
}

pub fn log_notification_sent(notification: &Notification) {
    write_info(&format!(
        "✅ Notification sent: {} at {}",
        notification.message,
        notification.timestamp.to_rfc3339()
    ));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

/// Log a received shutdown signal by name (e.g. `SIGTERM`)
pub fn log_signal(signal: &str) {
    write_info(&signal_line(signal));
}

fn signal_line(signal: &str) -> String {
    format!("[SIGNAL] {signal} received, shutting down...")
}

pub fn log_shutdown(active_connections: usize) {
    write_info(&format!(
        "[SHUTDOWN] Listener closed, {active_connections} connection(s) still finishing"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_line_names_signal() {
        assert_eq!(
            signal_line("SIGTERM"),
            "[SIGNAL] SIGTERM received, shutting down..."
        );
        assert_eq!(
            signal_line("SIGINT (Ctrl+C)"),
            "[SIGNAL] SIGINT (Ctrl+C) received, shutting down..."
        );
    }

    #[test]
    fn test_log_signal_without_writer_does_not_panic() {
        log_signal("SIGTERM");
    }
}
