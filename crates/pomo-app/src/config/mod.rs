//! Configuration file parsing for pomo
//!
//! Supports an optional `config.toml` (by default under the platform config
//! directory, e.g. `~/.config/pomo/config.toml`) with key bindings, notifier
//! and UI options. Interval lengths are not configurable here;
//! they change only through the in-app settings dialog.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, parse_settings, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;
