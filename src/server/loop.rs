// Server loop module
// Accepts connections until shutdown is requested, then drains in-flight ones

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config;
use crate::logger;

/// Upper bound on how long shutdown waits for in-flight connections
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Run the accept loop until `shutdown` resolves.
///
/// On shutdown the listener is closed first, so no new connections are
/// accepted; in-flight requests finish, idle keep-alive connections are
/// closed, and the function returns once every connection is gone or
/// `grace_period` has elapsed.
pub async fn start_server_loop<F>(
    listener: TcpListener,
    state: Arc<config::AppState>,
    shutdown: F,
    grace_period: Duration,
) where
    F: Future<Output = ()>,
{
    let graceful = GracefulShutdown::new();
    let active_connections = Arc::new(AtomicUsize::new(0));
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, &state, &graceful, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => break,
        }
    }

    drop(listener);
    logger::log_draining(active_connections.load(Ordering::SeqCst));

    if tokio::time::timeout(grace_period, graceful.shutdown())
        .await
        .is_err()
    {
        logger::log_drain_timeout(active_connections.load(Ordering::SeqCst));
    }

    logger::log_server_closed();
}
