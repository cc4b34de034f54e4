//! Settings loading from config.toml

use std::path::{Path, PathBuf};

use pomo_core::prelude::*;

use super::types::Settings;

/// Directory under the platform config dir
pub const CONFIG_DIR: &str = "pomo";

/// Settings file name
pub const CONFIG_FILENAME: &str = "config.toml";

/// Default location of the settings file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
/// The file is read once at startup and never written.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config(e.to_string()))
}
