//! Installable web app demo server that records "sent" notifications in an
//! in-memory log and lists them over a small JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod notifications;
pub mod server;

pub use error::ServerError;
