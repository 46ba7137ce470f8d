//! HTTP response building module
//!
//! Builders for every response the router can emit. Error responses are plain
//! text and never include request or filesystem details.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// CORS headers attached to every successful response
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Methods",
        "GET, POST, PUT, DELETE, OPTIONS",
    ),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Long-lived cache policy for fingerprinted assets (one year)
pub const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000";

/// Build 200 response for a static file
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    cacheable: bool,
) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type);

    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }

    if cacheable {
        builder = builder.header("Cache-Control", IMMUTABLE_CACHE_CONTROL);
    }

    builder.body(Full::new(data)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 200 response carrying the index document for a client-side route
pub fn build_index_fallback_response(data: Bytes) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", "text/html");

    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }

    builder.body(Full::new(data)).unwrap_or_else(|e| {
        log_build_error("fallback", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 403 Forbidden response
pub fn build_403_response() -> Response<Full<Bytes>> {
    build_plain_response(403, "Forbidden")
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_plain_response(404, "404 Not Found")
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_plain_response(500, "500 Internal Server Error")
}

fn build_plain_response(status: u16, message: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from_static(message.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::from_static(message.as_bytes())))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header<'a>(resp: &'a Response<Full<Bytes>>, name: &str) -> Option<&'a str> {
        resp.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_file_response_headers() {
        let resp = build_file_response(Bytes::from_static(b"body"), "text/css", true);
        assert_eq!(resp.status(), 200);
        assert_eq!(header(&resp, "content-type"), Some("text/css"));
        assert_eq!(header(&resp, "cache-control"), Some(IMMUTABLE_CACHE_CONTROL));
        for (name, value) in CORS_HEADERS {
            assert_eq!(header(&resp, name), Some(value));
        }
    }

    #[test]
    fn test_file_response_without_cache() {
        let resp = build_file_response(Bytes::new(), "application/json", false);
        assert!(resp.headers().get("cache-control").is_none());
    }

    #[test]
    fn test_fallback_response() {
        let resp = build_index_fallback_response(Bytes::from_static(b"<html></html>"));
        assert_eq!(resp.status(), 200);
        assert_eq!(header(&resp, "content-type"), Some("text/html"));
        assert_eq!(header(&resp, "access-control-allow-origin"), Some("*"));
        assert!(resp.headers().get("cache-control").is_none());
    }

    #[test]
    fn test_error_responses() {
        for (resp, status) in [
            (build_403_response(), 403),
            (build_404_response(), 404),
            (build_500_response(), 500),
        ] {
            assert_eq!(resp.status(), status);
            assert_eq!(header(&resp, "content-type"), Some("text/plain"));
            assert!(resp.headers().get("access-control-allow-origin").is_none());
        }
    }
}
