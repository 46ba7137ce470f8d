//! Per-request error taxonomy
//!
//! Every variant is resolved inside the request that produced it.

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ServeError {
    /// Path contained a traversal sequence
    Forbidden,
    /// No file, and either not fallback-eligible or the index document is missing
    NotFound,
    /// Metadata said regular file, but reading it failed
    ReadFailure(io::Error),
}

impl ServeError {
    pub const fn status(&self) -> u16 {
        match self {
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::ReadFailure(_) => 500,
        }
    }

    /// Convert into the plain-text response sent to the client
    pub fn into_response(self) -> Response<Full<Bytes>> {
        match self {
            Self::Forbidden => http::build_403_response(),
            Self::NotFound => http::build_404_response(),
            Self::ReadFailure(_) => http::build_500_response(),
        }
    }
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forbidden => write!(f, "path traversal rejected"),
            Self::NotFound => write!(f, "not found"),
            Self::ReadFailure(e) => write!(f, "read failed: {e}"),
        }
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFailure(e) => Some(e),
            _ => None,
        }
    }
}
