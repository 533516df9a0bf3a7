use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::WellchatError;

const CONFIG_DIR: &str = "wellchat";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `explicit_path`, or from the default location
///
/// An explicit path must exist. The default file is optional.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config, WellchatError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    match config_path() {
        Some(path) if path.is_file() => load_config_from_path(&path),
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, WellchatError> {
    let contents = fs::read_to_string(path).map_err(|source| WellchatError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents).map_err(|e| WellchatError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
#[path = "config_loader_tests.rs"]
mod config_loader_tests;
