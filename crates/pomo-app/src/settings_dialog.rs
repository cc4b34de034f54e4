//! Settings dialog state.
//!
//! Data model for the modal that edits the three interval lengths. The
//! rendering widget lives in pomo-tui's `widgets/settings_dialog.rs`. The
//! dialog only holds text; live [`Durations`] are untouched until the update
//! layer applies the result of [`SettingsDialogState::confirm`].

use crate::durations::{whole_minutes, Durations};
use crate::input_key::InputKey;

/// Number of editable fields
pub const FIELD_COUNT: usize = 3;

/// Maximum characters accepted per field
pub const FIELD_CHAR_LIMIT: usize = 4;

/// Floor applied to unparsable or too-small input
pub const MIN_MINUTES: u64 = 1;

/// The fields of the dialog, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Work,
    ShortRest,
    LongRest,
}

impl SettingsField {
    pub const ALL: [SettingsField; FIELD_COUNT] = [
        SettingsField::Work,
        SettingsField::ShortRest,
        SettingsField::LongRest,
    ];

    pub fn index(&self) -> usize {
        match self {
            SettingsField::Work => 0,
            SettingsField::ShortRest => 1,
            SettingsField::LongRest => 2,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % FIELD_COUNT]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Work => "Work",
            SettingsField::ShortRest => "Short rest",
            SettingsField::LongRest => "Long rest",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SettingsField::Work => "Work (minutes)",
            SettingsField::ShortRest => "Short rest (minutes)",
            SettingsField::LongRest => "Long rest (minutes)",
        }
    }
}

/// Single-line text buffer with a character limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: String,
    char_limit: usize,
}

impl TextField {
    pub fn new(value: impl Into<String>, char_limit: usize) -> Self {
        let mut value: String = value.into();
        if let Some((idx, _)) = value.char_indices().nth(char_limit) {
            value.truncate(idx);
        }
        Self { value, char_limit }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append a character; returns false when the limit is reached
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.value.chars().count() >= self.char_limit {
            return false;
        }
        self.value.push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Transient state of the open settings dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDialogState {
    fields: [TextField; FIELD_COUNT],
    focused: usize,
}

impl SettingsDialogState {
    /// Seed the fields with the current durations in whole minutes
    pub fn new(durations: &Durations) -> Self {
        let field = |d| TextField::new(whole_minutes(d).to_string(), FIELD_CHAR_LIMIT);
        Self {
            fields: [
                field(durations.work),
                field(durations.short_rest),
                field(durations.long_rest),
            ],
            focused: 0,
        }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_field(&self) -> SettingsField {
        SettingsField::from_index(self.focused)
    }

    pub fn field(&self, field: SettingsField) -> &TextField {
        &self.fields[field.index()]
    }

    pub fn field_mut(&mut self, field: SettingsField) -> &mut TextField {
        &mut self.fields[field.index()]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FIELD_COUNT;
    }

    pub fn focus_previous(&mut self) {
        self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    /// Forward text editing keys to the focused field.
    ///
    /// Returns true if the buffer changed.
    pub fn handle_key(&mut self, key: &InputKey) -> bool {
        let focused = self.focused_field();
        let field = self.field_mut(focused);
        match key {
            InputKey::Char(c) if !c.is_control() => field.insert_char(*c),
            InputKey::Backspace => field.backspace(),
            InputKey::CharCtrl('u') => {
                let changed = !field.is_empty();
                field.clear();
                changed
            }
            _ => false,
        }
    }

    /// Interpret the three buffers as minutes, clamping bad input to 1
    pub fn confirm(&self) -> Durations {
        Durations::from_minutes(
            parse_minutes(self.field(SettingsField::Work).value()),
            parse_minutes(self.field(SettingsField::ShortRest).value()),
            parse_minutes(self.field(SettingsField::LongRest).value()),
        )
    }
}

/// Parse a minutes field; anything unparsable or below 1 becomes 1
pub fn parse_minutes(text: &str) -> u64 {
    match text.trim().parse::<i64>() {
        Ok(n) if n >= MIN_MINUTES as i64 => n as u64,
        _ => MIN_MINUTES,
    }
}
