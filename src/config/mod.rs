// Configuration module entry point
// Loads settings from defaults and the environment, and builds the shared state

mod state;
mod types;

use std::net::SocketAddr;

use crate::logger::ACCESS_LOG_FORMATS;

// Re-export public types
pub use state::{default_asset_root, AppState, ASSET_DIR_NAME};
pub use types::{Config, LoggingConfig, ServerConfig};

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 8081;

impl Config {
    /// Load configuration from the process environment
    ///
    /// `PORT` selects the listen port; other settings use the `SPA_` prefix
    /// with `__` between sections, e.g. `SPA_LOGGING__ACCESS_LOG=false`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let port = std::env::var("PORT").ok();
        let env = config::Environment::with_prefix("SPA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Self::build(port.as_deref(), Some(env))
    }

    /// Defaults plus an optional `PORT` value, ignoring the rest of the environment
    pub fn with_port(port: Option<&str>) -> Result<Self, config::ConfigError> {
        Self::build(port, None)
    }

    fn build(
        port: Option<&str>,
        env: Option<config::Environment>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?;

        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        // An empty PORT counts as unset
        let port = port.map(str::trim).filter(|p| !p.is_empty());
        let settings = builder.set_override_option("server.port", port)?.build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if !ACCESS_LOG_FORMATS.contains(&self.logging.access_log_format.as_str()) {
            return Err(config::ConfigError::Message(format!(
                "unsupported access_log_format '{}' (expected one of: {})",
                self.logging.access_log_format,
                ACCESS_LOG_FORMATS.join(", ")
            )));
        }
        if self.server.workers == Some(0) {
            return Err(config::ConfigError::Message(
                "server.workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
