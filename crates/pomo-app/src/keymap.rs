//! Main-view key bindings
//!
//! The key map is built once at startup from [`KeySettings`] and then held
//! immutably in [`crate::state::AppState`].

use pomo_core::prelude::*;

use crate::config::KeySettings;
use crate::input_key::InputKey;

/// A set of keys that trigger one command, plus its help text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    keys: Vec<InputKey>,
    help_desc: &'static str,
}

impl KeyBinding {
    pub fn new(keys: Vec<InputKey>, help_desc: &'static str) -> Self {
        Self { keys, help_desc }
    }

    pub fn matches(&self, key: &InputKey) -> bool {
        self.keys.contains(key)
    }

    pub fn keys(&self) -> &[InputKey] {
        &self.keys
    }

    /// Label of the first bound key, as shown in the help footer
    pub fn help_key(&self) -> String {
        self.keys.first().map(InputKey::label).unwrap_or_default()
    }

    pub fn help_desc(&self) -> &'static str {
        self.help_desc
    }
}

/// Bindings for the main (timer) view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub toggle: KeyBinding,
    pub settings: KeyBinding,
    pub quit: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: KeyBinding::new(vec![InputKey::Enter], TOGGLE_DESC),
            settings: KeyBinding::new(vec![InputKey::Char('s')], SETTINGS_DESC),
            quit: KeyBinding::new(vec![InputKey::CharCtrl('c')], QUIT_DESC),
        }
    }
}

const TOGGLE_DESC: &str = "Start/Stop timer";
const SETTINGS_DESC: &str = "Settings";
const QUIT_DESC: &str = "Exit";

impl KeyMap {
    /// Build the key map from configured key specs.
    ///
    /// Invalid specs are skipped with a warning. A binding left with no
    /// valid keys falls back to its default.
    pub fn from_settings(settings: &KeySettings) -> Self {
        let defaults = Self::default();
        Self {
            toggle: binding_or_default(&settings.toggle, defaults.toggle),
            settings: binding_or_default(&settings.settings, defaults.settings),
            quit: binding_or_default(&settings.quit, defaults.quit),
        }
    }

    /// Bindings shown in the help footer, in display order
    pub fn short_help(&self) -> [&KeyBinding; 3] {
        [&self.toggle, &self.settings, &self.quit]
    }
}

fn binding_or_default(specs: &[String], default: KeyBinding) -> KeyBinding {
    let keys: Vec<InputKey> = specs
        .iter()
        .filter_map(|spec| match parse_key_spec(spec) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("Ignoring key binding: {}", e);
                None
            }
        })
        .collect();

    if keys.is_empty() {
        debug!(
            "No usable keys for '{}', using default {:?}",
            default.help_desc,
            default.keys()
        );
        default
    } else {
        KeyBinding::new(keys, default.help_desc)
    }
}

/// Parse a key spec such as `"enter"`, `"ctrl+c"`, `"s"`, `"shift+tab"`, `"f5"`
pub fn parse_key_spec(spec: &str) -> Result<InputKey> {
    let normalized = spec.trim().to_ascii_lowercase();

    if let Some(rest) = normalized.strip_prefix("ctrl+") {
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(InputKey::CharCtrl(c)),
            _ => Err(Error::invalid_key(spec)),
        };
    }

    let key = match normalized.as_str() {
        "enter" | "return" => InputKey::Enter,
        "esc" | "escape" => InputKey::Esc,
        "tab" => InputKey::Tab,
        "shift+tab" | "backtab" => InputKey::BackTab,
        "space" => InputKey::Char(' '),
        "backspace" => InputKey::Backspace,
        "delete" | "del" => InputKey::Delete,
        "up" => InputKey::Up,
        "down" => InputKey::Down,
        "left" => InputKey::Left,
        "right" => InputKey::Right,
        other => {
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(InputKey::F(n));
                }
                return Err(Error::invalid_key(spec));
            }
            // Single characters keep their original case ("S" != "s")
            let trimmed = spec.trim();
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => InputKey::Char(c),
                _ => return Err(Error::invalid_key(spec)),
            }
        }
    };
    Ok(key)
}
