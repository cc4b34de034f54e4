//! Configuration types for pomo
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `KeySettings`, `NotifySettings`, `UiSettings` - its sections

use serde::{Deserialize, Serialize};

/// Global application settings from config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub keys: KeySettings,

    #[serde(default)]
    pub notify: NotifySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Main-view key bindings, as lists of key specs
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct KeySettings {
    /// Start/stop the countdown
    #[serde(default = "default_toggle_keys")]
    pub toggle: Vec<String>,

    /// Open the settings dialog
    #[serde(default = "default_settings_keys")]
    pub settings: Vec<String>,

    /// Exit immediately
    #[serde(default = "default_quit_keys")]
    pub quit: Vec<String>,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            toggle: default_toggle_keys(),
            settings: default_settings_keys(),
            quit: default_quit_keys(),
        }
    }
}

fn default_toggle_keys() -> Vec<String> {
    vec!["enter".to_string()]
}

fn default_settings_keys() -> Vec<String> {
    vec!["s".to_string()]
}

fn default_quit_keys() -> Vec<String> {
    vec!["ctrl+c".to_string()]
}

/// Desktop notification command
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NotifySettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Program to run; the message is passed as its last argument
    #[serde(default = "default_notify_command")]
    pub command: String,

    /// Extra arguments placed before the message
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_notify_command(),
            args: Vec::new(),
        }
    }
}

fn default_notify_command() -> String {
    "notify-send".to_string()
}

/// Display options
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UiSettings {
    /// Show the big title banner above the clock
    #[serde(default = "default_true")]
    pub show_title: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_title: true }
    }
}

fn default_true() -> bool {
    true
}
