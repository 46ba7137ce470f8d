// Connection handling module
// Serves a single accepted TCP connection with hyper's HTTP/1.1 driver

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use hyper_util::server::graceful::GracefulShutdown;

use crate::config;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Serves HTTP/1.1 with keep-alive, routing every request through the handler
/// 3. Registers the connection with `graceful` so shutdown can drain it
/// 4. Decrements the active connection counter when done
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address, used for access logging
/// * `state` - Shared application state
/// * `graceful` - Shutdown coordinator watching every live connection
/// * `conn_counter` - Active connection counter
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<config::AppState>,
    graceful: &GracefulShutdown,
    conn_counter: &Arc<AtomicUsize>,
) {
    conn_counter.fetch_add(1, Ordering::SeqCst);

    let io = TokioIo::new(stream);
    let state = Arc::clone(state);
    let service = service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr));

    let conn = http1::Builder::new()
        .keep_alive(true)
        .serve_connection(io, service);
    let conn = graceful.watch(conn);

    let conn_counter = Arc::clone(conn_counter);
    tokio::spawn(async move {
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
