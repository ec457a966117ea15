pub mod model;
mod nickname;

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

const APP_DIR: &str = "dogechat";
const CONFIG_FILE: &str = "config.toml";

/// `<config dir>/dogechat/config.toml`, falling back to the working directory.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

pub fn load_config() -> Result<AppConfig> {
    read_config(&config_path())
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    write_config(&config_path(), config)
}

/// Read a config file. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<AppConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read config from {}", path.display()));
        }
    };
    let mut config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    // Blank nicknames fall back to a generated one
    if config.nickname.trim().is_empty() {
        config.nickname = AppConfig::default().nickname;
    }
    Ok(config)
}

/// Write `config` to a staging file beside `path`, then rename it into place.
pub fn write_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

    let staging = path.with_extension("toml.tmp");
    std::fs::write(&staging, contents)
        .with_context(|| format!("Failed to write config to {}", staging.display()))?;
    std::fs::rename(&staging, path)
        .with_context(|| format!("Failed to move config into {}", path.display()))?;
    Ok(())
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
