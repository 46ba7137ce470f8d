use std::process::ExitCode;
use std::sync::Arc;

use spa_server::config::{self, AppState};
use spa_server::logger;
use spa_server::server::{self, ShutdownSignals};

fn main() -> ExitCode {
    let cfg = match config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_config_error(&e);
            return ExitCode::FAILURE;
        }
    };

    // Worker thread count comes from config, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    logger::log_config_worker_threads(cfg.server.workers);

    let runtime = match runtime_builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            logger::log_error(&format!("Failed to start Tokio runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> ExitCode {
    let addr = match cfg.get_socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            logger::log_config_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let state = match AppState::for_current_exe(cfg) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            logger::log_error(&format!("Failed to locate asset directory: {e}"));
            return ExitCode::FAILURE;
        }
    };
    if !state.assets.root().is_dir() {
        logger::log_missing_asset_root(state.assets.root());
    }

    let signals = match ShutdownSignals::register() {
        Ok(signals) => signals,
        Err(e) => {
            logger::log_error(&format!("Failed to register signal handlers: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let listener = match server::create_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(addr.port(), &e);
            return ExitCode::FAILURE;
        }
    };

    logger::log_server_start(&addr, state.assets.root(), &state.config);

    let shutdown = async move {
        let name = signals.recv().await;
        logger::log_signal_received(name);
    };
    server::start_server_loop(listener, state, shutdown, server::SHUTDOWN_GRACE_PERIOD).await;

    ExitCode::SUCCESS
}
