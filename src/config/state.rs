// Application state module
// Immutable per-process state shared by every connection task

use std::io;
use std::path::PathBuf;

use super::types::Config;
use crate::handler::StaticAssets;
use crate::http::MimeTable;

/// Directory served, relative to the directory holding the executable
pub const ASSET_DIR_NAME: &str = "build";

/// Application state
///
/// Built once before the listener starts; never mutated afterwards.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub assets: StaticAssets,
}

impl AppState {
    pub const fn new(config: Config, assets: StaticAssets) -> Self {
        Self { config, assets }
    }

    /// State serving the `build` directory next to the running executable
    pub fn for_current_exe(config: Config) -> io::Result<Self> {
        let assets = StaticAssets::new(default_asset_root()?, MimeTable::default());
        Ok(Self::new(config, assets))
    }
}

/// `<dir of current executable>/build`
pub fn default_asset_root() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        )
    })?;
    Ok(dir.join(ASSET_DIR_NAME))
}
