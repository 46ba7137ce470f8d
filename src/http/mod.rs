//! HTTP protocol layer module
//!
//! Content-type detection and response builders, decoupled from the routing decision.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use mime::MimeTable;
pub use response::{
    build_403_response, build_404_response, build_500_response, build_file_response,
    build_index_fallback_response,
};
