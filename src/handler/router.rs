//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: extracts the raw request target,
//! hands it to the static file router, and writes the access log.

use crate::config::AppState;
use crate::handler::static_files;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::HeaderMap;
use hyper::{Request, Response, Uri};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    // The body is never read; only the head is kept across the filesystem awaits
    let (parts, _) = req.into_parts();
    let raw_path = raw_target(&parts.uri);

    let response = static_files::route(&state.assets, &parts.method, raw_path).await;

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.to_string(),
            parts.method.to_string(),
            raw_path.to_string(),
        );
        entry.http_version = version_label(parts.version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.user_agent = header_value(&parts.headers, "user-agent");
        entry.referer = header_value(&parts.headers, "referer");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Path plus query exactly as the client sent it
fn raw_target(uri: &Uri) -> &str {
    uri.path_and_query().map_or("/", |pq| pq.as_str())
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

const fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handler::static_files::StaticAssets;
    use crate::http::MimeTable;
    use http_body_util::{BodyExt, Empty};

    fn state(root: &std::path::Path) -> Arc<AppState> {
        let mut config = Config::with_port(None).expect("default config");
        config.logging.access_log = false;
        Arc::new(AppState::new(
            config,
            StaticAssets::new(root, MimeTable::default()),
        ))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:50000".parse().unwrap()
    }

    #[test]
    fn test_raw_target_keeps_query() {
        let uri: Uri = "/app.js?v=2".parse().unwrap();
        assert_eq!(raw_target(&uri), "/app.js?v=2");
    }

    #[test]
    fn test_raw_target_absolute_form() {
        let uri: Uri = "http://example.com/dashboard?x=1".parse().unwrap();
        assert_eq!(raw_target(&uri), "/dashboard?x=1");
    }

    #[tokio::test]
    async fn test_handle_request_serves_index() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("index.html"), b"<html>ok</html>").unwrap();

        let req = Request::builder()
            .uri("/")
            .body(Empty::<Bytes>::new())
            .unwrap();
        let resp = handle_request(req, state(dir.path()), peer()).await.unwrap();
        assert_eq!(resp.status(), 200);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_handle_request_rejects_traversal() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let req = Request::builder()
            .method("PUT")
            .uri("/static/../secret")
            .body(Empty::<Bytes>::new())
            .unwrap();
        let resp = handle_request(req, state(dir.path()), peer()).await.unwrap();
        assert_eq!(resp.status(), 403);
    }
}
