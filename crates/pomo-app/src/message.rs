//! Message types for the application (TEA pattern)

use crate::durations::Durations;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// One countdown tick (fixed 1s cadence while the timer runs)
    Tick,

    /// Terminal was resized (forces nothing but a redraw)
    Resize { width: u16, height: u16 },

    /// Exit immediately (quit key, SIGINT/SIGTERM)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Timer Messages
    // ─────────────────────────────────────────────────────────
    /// Start or pause the countdown
    ToggleTimer,
    /// The active interval reached zero
    TimerElapsed,

    // ─────────────────────────────────────────────────────────
    // Settings Dialog Messages
    // ─────────────────────────────────────────────────────────
    /// Open the settings dialog seeded with current durations
    OpenSettings,
    /// Close the dialog without applying anything
    CancelSettings,
    /// Move focus to the next field
    SettingsFocusNext,
    /// Move focus to the previous field
    SettingsFocusPrevious,
    /// Text editing key for the focused field
    SettingsInput(InputKey),
    /// Parse the fields and save
    ConfirmSettings,
    /// Parsed durations from a confirmed dialog
    SettingsSaved { durations: Durations },
}
