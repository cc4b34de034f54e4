//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use pomo_core::prelude::*;
use pomo_core::AppPhase;

use super::{keys::handle_key, settings, timer, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // The frame is re-laid out from its own size on the next draw
        Message::Resize { width, height } => {
            debug!("Terminal resized to {}x{}", width, height);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Timer Messages
        // ─────────────────────────────────────────────────────────
        Message::Tick => timer::handle_tick(state),
        Message::ToggleTimer => timer::handle_toggle(state),
        Message::TimerElapsed => timer::handle_elapsed(state),

        // ─────────────────────────────────────────────────────────
        // Settings Dialog Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenSettings => settings::handle_open_settings(state),
        Message::CancelSettings => settings::handle_cancel_settings(state),
        Message::SettingsFocusNext => settings::handle_focus_next(state),
        Message::SettingsFocusPrevious => settings::handle_focus_previous(state),
        Message::SettingsInput(key) => settings::handle_settings_input(state, key),
        Message::ConfirmSettings => settings::handle_confirm_settings(state),
        Message::SettingsSaved { durations } => settings::handle_settings_saved(state, durations),
    }
}
