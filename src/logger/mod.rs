//! Logger module
//!
//! Provides logging utilities for the server including:
//! - Startup banner and shutdown lifecycle lines
//! - Per-request access logging
//! - Error and warning logging
//!
//! Informational lines go to stdout, warnings and errors to stderr.

mod format;

pub use format::{AccessLogEntry, ACCESS_LOG_FORMATS};

use crate::config::Config;
use std::net::SocketAddr;
use std::path::Path;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, asset_root: &Path, config: &Config) {
    write_info("======================================");
    write_info("Server started");
    write_info(&format!("Serving directory: {}", asset_root.display()));
    write_info(&format!("Listening on: {addr}"));
    write_info(&format!("Open: http://localhost:{}", config.server.port));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if config.logging.access_log {
        write_info(&format!(
            "Access log format: {}",
            config.logging.access_log_format
        ));
    }
    write_info("Press Ctrl+C to stop the server");
    write_info("======================================\n");
}

pub fn log_config_worker_threads(workers: Option<usize>) {
    match workers {
        Some(n) => write_info(&format!("[CONFIG] Using {n} worker threads")),
        None => write_info("[CONFIG] Using default worker threads (CPU cores)"),
    }
}

pub fn log_missing_asset_root(asset_root: &Path) {
    log_warning(&format!(
        "Asset directory does not exist yet: {}",
        asset_root.display()
    ));
}

pub fn log_bind_failed(port: u16, err: &std::io::Error) {
    if err.kind() == std::io::ErrorKind::AddrInUse {
        log_error(&format!("Port {port} is already in use, choose another port"));
        write_error("        Hint: set the PORT environment variable, e.g. PORT=3000");
    } else {
        log_error(&format!("Server error: failed to bind port {port}: {err}"));
    }
}

pub fn log_config_error(err: &impl std::fmt::Display) {
    log_error(&format!("Invalid configuration: {err}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_signal_received(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received, shutting down server..."));
}

pub fn log_draining(active: usize) {
    write_info(&format!(
        "[SHUTDOWN] Listener closed, waiting for {active} active connection(s)"
    ));
}

pub fn log_drain_timeout(remaining: usize) {
    log_warning(&format!(
        "[SHUTDOWN] Grace period elapsed with {remaining} connection(s) still open"
    ));
}

pub fn log_server_closed() {
    write_info("[SHUTDOWN] Server closed");
}
