pub mod config;
pub mod extract;
pub mod output;
pub mod run;

use std::path::{Path, PathBuf};

use tracing::debug;

use recscan_core::RecscanConfig;

/// Location of the per-user config file written by `recscan config`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recscan")
        .join("config.json")
}

/// Load the config file given on the command line, else the per-user
/// config file when it exists, else the defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<RecscanConfig> {
    if let Some(path) = config_path {
        return Ok(RecscanConfig::from_file(Path::new(path))?);
    }

    let user_config = default_config_path();
    if user_config.exists() {
        debug!("Using config from {}", user_config.display());
        Ok(RecscanConfig::from_file(&user_config)?)
    } else {
        Ok(RecscanConfig::default())
    }
}
