//! Key event handlers for the active view

use crate::input_key::InputKey;
use crate::keymap::KeyMap;
use crate::message::Message;
use crate::state::{ActiveView, AppState};

/// Convert key events to messages based on the active view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.view {
        ActiveView::Main => handle_key_main(&state.keymap, key),
        ActiveView::Settings(_) => handle_key_settings(key),
    }
}

/// Handle key events on the timer screen
fn handle_key_main(keymap: &KeyMap, key: InputKey) -> Option<Message> {
    // Quit wins if a key is bound twice
    if keymap.quit.matches(&key) {
        Some(Message::Quit)
    } else if keymap.toggle.matches(&key) {
        Some(Message::ToggleTimer)
    } else if keymap.settings.matches(&key) {
        Some(Message::OpenSettings)
    } else {
        None
    }
}

/// Handle key events in the settings dialog
fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        // Focus movement
        InputKey::Tab | InputKey::Down => Some(Message::SettingsFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::SettingsFocusPrevious),

        // Save
        InputKey::Enter => Some(Message::ConfirmSettings),

        // Cancel (Ctrl+C closes the dialog rather than quitting)
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::CancelSettings),

        // Text editing
        InputKey::Char(_) | InputKey::Backspace | InputKey::CharCtrl('u') => {
            Some(Message::SettingsInput(key))
        }

        _ => None,
    }
}
