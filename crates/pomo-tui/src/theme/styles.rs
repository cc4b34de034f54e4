//! Semantic style builders.

use pomo_core::Phase;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::palette;

// --- Screen ---

/// Background for the whole screen.
///
/// Running always wins; otherwise the phase decides between work and rest.
pub fn screen_bg(phase: Phase, running: bool) -> Color {
    if running {
        palette::RUNNING_BG
    } else if phase.is_rest() {
        palette::REST_BG
    } else {
        palette::WORK_BG
    }
}

pub fn screen(phase: Phase, running: bool) -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(screen_bg(phase, running))
}

// --- Text styles ---
pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn clock() -> Style {
    Style::default().fg(palette::TEXT_BRIGHT)
}

pub fn phase_label() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

// --- Help footer ---
pub fn help_key() -> Style {
    Style::default().fg(palette::HELP_KEY)
}

pub fn help_desc() -> Style {
    Style::default().fg(palette::HELP_DESC)
}

pub fn help_separator() -> Style {
    Style::default().fg(palette::HELP_SEPARATOR)
}

// --- Progress bar ---
pub fn progress_filled() -> Style {
    Style::default().fg(palette::PROGRESS_FILLED)
}

pub fn progress_empty() -> Style {
    Style::default().fg(palette::PROGRESS_EMPTY)
}

// --- Settings dialog ---
pub fn dialog_title() -> Style {
    Style::default()
        .fg(palette::DIALOG_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn dialog_field(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::DIALOG_FOCUS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_PRIMARY)
    }
}

pub fn dialog_help() -> Style {
    Style::default().fg(palette::DIALOG_HELP)
}

pub fn placeholder() -> Style {
    Style::default().fg(palette::PLACEHOLDER)
}

pub fn cursor() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

// --- Block builders ---

/// Rounded dialog frame with inner padding
pub fn dialog_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::DIALOG_BORDER))
        .padding(Padding::new(3, 3, 1, 1))
        .style(Style::default().bg(palette::DIALOG_BG))
}
