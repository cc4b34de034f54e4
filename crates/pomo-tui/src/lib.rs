//! pomo-tui - Terminal UI for the pomo timer
//!
//! Provides the ratatui-based interface on top of pomo-app: crossterm event
//! conversion, the countdown tick source, rendering, and the main loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
