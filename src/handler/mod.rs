//! Request handler module
//!
//! Responsible for request routing dispatch and serving the embedded web app.

pub mod assets;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
