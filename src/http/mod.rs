//! HTTP protocol layer module
//!
//! Response builders shared by the content routes and the notification API.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_413_response, build_options_response,
    build_static_response, CONTENT_ALLOW,
};
