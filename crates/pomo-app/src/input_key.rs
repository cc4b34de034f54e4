//! Abstract input key event, independent of terminal library.
//!
//! This module defines the `InputKey` enum which abstracts keyboard input
//! from the underlying terminal library (crossterm). The key map, the handlers
//! and their tests only ever see `InputKey`, so pomo-app never depends on
//! crossterm.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,

    // Function keys
    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Label used in help footers ("Enter", "Ctrl+c", "s", ...)
    pub fn label(&self) -> String {
        match self {
            InputKey::Char(' ') => "Space".to_string(),
            InputKey::Char(c) => c.to_string(),
            InputKey::CharCtrl(c) => format!("Ctrl+{c}"),
            InputKey::Up => "↑".to_string(),
            InputKey::Down => "↓".to_string(),
            InputKey::Left => "←".to_string(),
            InputKey::Right => "→".to_string(),
            InputKey::Enter => "Enter".to_string(),
            InputKey::Esc => "Esc".to_string(),
            InputKey::Tab => "Tab".to_string(),
            InputKey::BackTab => "Shift+Tab".to_string(),
            InputKey::Backspace => "Backspace".to_string(),
            InputKey::Delete => "Del".to_string(),
            InputKey::F(n) => format!("F{n}"),
        }
    }
}
