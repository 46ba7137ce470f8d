//! Static file serving module
//!
//! The routing decision: serve a literal file from the asset root, fall back to
//! the index document for client-side routes, or answer with 403/404/500.

use crate::handler::error::ServeError;
use crate::http::{self, mime, MimeTable};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};
use std::path::{Path, PathBuf};
use tokio::fs;

const INDEX_FILE: &str = "index.html";
const WASM_CONTENT_TYPE: &str = "application/wasm";

/// Asset root plus the MIME table used to describe its files
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
    mime_types: MimeTable,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>, mime_types: MimeTable) -> Self {
        Self {
            root: root.into(),
            mime_types,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }
}

/// Route a request to a file, the SPA fallback document, or an error response
pub async fn route(
    assets: &StaticAssets,
    method: &Method,
    raw_path: &str,
) -> Response<Full<Bytes>> {
    match resolve(assets, method, raw_path).await {
        Ok(resp) => resp,
        Err(err) => {
            match &err {
                ServeError::Forbidden => {
                    logger::log_warning(&format!("Path traversal attempt blocked: {raw_path}"));
                }
                ServeError::ReadFailure(e) => {
                    logger::log_error(&format!("Failed to read file for '{raw_path}': {e}"));
                }
                ServeError::NotFound => {}
            }
            err.into_response()
        }
    }
}

/// Normalize the raw request target into the path used for lookup
///
/// `/` becomes `/index.html`, then everything from the first `?` is dropped.
pub fn effective_path(raw_path: &str) -> &str {
    let path = if raw_path == "/" { "/index.html" } else { raw_path };
    path.split_once('?').map_or(path, |(base, _)| base)
}

async fn resolve(
    assets: &StaticAssets,
    method: &Method,
    raw_path: &str,
) -> Result<Response<Full<Bytes>>, ServeError> {
    let path = effective_path(raw_path);

    // Textual check only: any "..", even inside a file name, is rejected
    if path.contains("..") {
        return Err(ServeError::Forbidden);
    }

    let full_path = assets.root.join(path.trim_start_matches('/'));
    let mime_type = assets.mime_types.content_type(&full_path);

    let is_file = fs::metadata(&full_path)
        .await
        .is_ok_and(|meta| meta.is_file());

    if !is_file {
        // No extension: treat as a client-side route
        if *method == Method::GET && !path.contains('.') {
            return serve_index_fallback(assets).await;
        }
        return Err(ServeError::NotFound);
    }

    let data = fs::read(&full_path).await.map_err(ServeError::ReadFailure)?;

    let content_type = if mime::extension_key(&full_path).as_deref() == Some(".wasm") {
        WASM_CONTENT_TYPE
    } else {
        mime_type
    };

    Ok(http::build_file_response(
        Bytes::from(data),
        content_type,
        is_long_lived(mime_type, path),
    ))
}

async fn serve_index_fallback(
    assets: &StaticAssets,
) -> Result<Response<Full<Bytes>>, ServeError> {
    match fs::read(assets.index_path()).await {
        Ok(data) => Ok(http::build_index_fallback_response(Bytes::from(data))),
        Err(e) => {
            logger::log_warning(&format!("Index document unavailable for fallback: {e}"));
            Err(ServeError::NotFound)
        }
    }
}

/// Images, fonts, scripts and stylesheets get the one-year cache policy
fn is_long_lived(mime_type: &str, path: &str) -> bool {
    mime_type.contains("image")
        || mime_type.contains("font")
        || path.ends_with(".js")
        || path.ends_with(".css")
}
