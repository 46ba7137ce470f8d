// Server module entry point
// Listener creation, connection handling, signal handling and the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used types
pub use listener::create_listener;
pub use server_loop::{start_server_loop, SHUTDOWN_GRACE_PERIOD};
pub use signal::ShutdownSignals;
