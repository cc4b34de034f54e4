//! Settings dialog handlers
//!
//! Handles opening, editing, confirming and cancelling the dialog. Confirming
//! is split in two steps: `ConfirmSettings` parses the fields and emits
//! `SettingsSaved`, whose handler closes the dialog and applies the result.

use pomo_core::prelude::*;

use crate::durations::{whole_minutes, Durations};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Open the dialog (ignored if it is already open)
pub fn handle_open_settings(state: &mut AppState) -> UpdateResult {
    if !state.is_settings_open() {
        state.open_settings();
    }
    UpdateResult::none()
}

/// Close the dialog, leaving durations and cycle untouched
pub fn handle_cancel_settings(state: &mut AppState) -> UpdateResult {
    state.close_settings();
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    if let Some(dialog) = state.settings_dialog_mut() {
        dialog.focus_next();
    }
    UpdateResult::none()
}

pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    if let Some(dialog) = state.settings_dialog_mut() {
        dialog.focus_previous();
    }
    UpdateResult::none()
}

pub fn handle_settings_input(state: &mut AppState, key: InputKey) -> UpdateResult {
    if let Some(dialog) = state.settings_dialog_mut() {
        dialog.handle_key(&key);
    }
    UpdateResult::none()
}

/// Parse the fields and hand the durations to `SettingsSaved`
pub fn handle_confirm_settings(state: &mut AppState) -> UpdateResult {
    match state.settings_dialog() {
        Some(dialog) => UpdateResult::message(Message::SettingsSaved {
            durations: dialog.confirm(),
        }),
        None => UpdateResult::none(),
    }
}

/// Close the dialog, replace durations and start a fresh work interval
pub fn handle_settings_saved(state: &mut AppState, durations: Durations) -> UpdateResult {
    state.close_settings();
    state.apply_durations(durations);

    info!(
        "Settings saved: work={}m short_rest={}m long_rest={}m",
        whole_minutes(durations.work),
        whole_minutes(durations.short_rest),
        whole_minutes(durations.long_rest)
    );

    UpdateResult::none()
}
