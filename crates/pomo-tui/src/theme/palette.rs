//! Color palette.
//!
//! Background colors are true-color; accents use the 256-color indices the
//! help footer and dialog have always used.

use ratatui::style::Color;

// --- Screen backgrounds ---
pub const WORK_BG: Color = Color::Rgb(0xAA, 0x2B, 0x1D); // Idle, work phase
pub const REST_BG: Color = Color::Rgb(0x08, 0x83, 0x95); // Idle, rest phase
pub const RUNNING_BG: Color = Color::Rgb(0x06, 0x0C, 0x0D); // Countdown running

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_BRIGHT: Color = Color::Indexed(231);

// --- Help footer ---
pub const HELP_KEY: Color = Color::Indexed(228);
pub const HELP_DESC: Color = Color::Indexed(252);
pub const HELP_SEPARATOR: Color = Color::Indexed(240);

// --- Progress bar ---
pub const PROGRESS_FILLED: Color = Color::Indexed(231);
pub const PROGRESS_EMPTY: Color = Color::Indexed(240);

// --- Settings dialog ---
pub const DIALOG_BORDER: Color = Color::Indexed(63);
pub const DIALOG_TITLE: Color = Color::Indexed(205);
pub const DIALOG_BG: Color = Color::Indexed(235);
pub const DIALOG_FOCUS: Color = Color::Indexed(212);
pub const DIALOG_HELP: Color = Color::Indexed(240);
pub const PLACEHOLDER: Color = Color::Indexed(240);

// --- Modal backdrop ---
pub const BACKDROP_FG: Color = Color::Indexed(235);
pub const BACKDROP_BG: Color = Color::Black;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
