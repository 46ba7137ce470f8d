//! Static asset server with single-page-application fallback routing.
//!
//! Files are served from a fixed asset root; extensionless paths that match no
//! file are answered with the root `index.html` so a client-side router can
//! take over.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
