//! Request handler module
//!
//! Request dispatch, the static file routing decision, and its error taxonomy.

pub mod error;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use error::ServeError;
pub use router::handle_request;
pub use static_files::{route, StaticAssets};
