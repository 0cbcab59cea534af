// Configuration module entry point
// Loads the file-backed configuration and holds shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig, RoutesConfig, ServerConfig,
};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension).
    /// A missing file is not an error; built-in defaults apply.
    pub fn load_from(config_path: &str) -> Result<Self, ServerError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("http.server_name", "pwa-notify")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| ServerError::InvalidAddress(format!("{addr}: {e}")))
    }

    /// Whether connections are kept open between requests
    pub const fn keep_alive(&self) -> bool {
        self.performance.keep_alive_timeout > 0
    }

    /// How long a connection may wait for the next request's headers.
    ///
    /// With keep-alive on this is the idle timeout between requests,
    /// otherwise the read timeout for the single request.
    pub const fn header_read_timeout(&self) -> Duration {
        if self.keep_alive() {
            Duration::from_secs(self.performance.keep_alive_timeout)
        } else {
            Duration::from_secs(self.performance.read_timeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/config").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.workers.is_none());
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.logging.access_log_file.is_none());
        assert_eq!(cfg.http.max_body_size, 1_048_576);
        assert!(!cfg.http.enable_cors);
        assert!(cfg.routes.health.enabled);
        assert_eq!(cfg.routes.health.path, "/healthz");
    }

    #[test]
    fn test_socket_addr_binds_all_interfaces() {
        let cfg = Config::load_from("does-not-exist/config").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_invalid_host_rejected() {
        let mut cfg = Config::load_from("does-not-exist/config").unwrap();
        cfg.server.host = "not a host".to_string();
        assert!(matches!(
            cfg.get_socket_addr(),
            Err(ServerError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("pwa-notify-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("server.toml");
        std::fs::write(
            &file,
            "[server]\nport = 9090\n\n[logging]\naccess_log = false\n\n[routes.health]\nenabled = false\n",
        )
        .unwrap();

        let path = dir.join("server");
        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(!cfg.logging.access_log);
        assert!(!cfg.routes.health.enabled);
        assert_eq!(cfg.routes.health.path, "/healthz");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_idle_timeout_follows_keep_alive() {
        let mut cfg = Config::load_from("does-not-exist/config").unwrap();
        assert!(cfg.keep_alive());
        assert_eq!(cfg.header_read_timeout(), Duration::from_secs(75));

        cfg.performance.keep_alive_timeout = 0;
        cfg.performance.read_timeout = 12;
        assert!(!cfg.keep_alive());
        assert_eq!(cfg.header_read_timeout(), Duration::from_secs(12));
    }
}
