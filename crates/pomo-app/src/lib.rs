//! pomo-app - Application state and orchestration for the pomo timer
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`], a [`Message`] enum, and a side-effect
//! free [`handler::update`] function that returns follow-up messages and
//! [`UpdateAction`] effects. Effects (desktop notifications) are executed by
//! [`process::process_message`] through the [`Notifier`].

pub mod actions;
pub mod config;
pub mod cycle;
pub mod durations;
pub mod handler;
pub mod input_key;
pub mod keymap;
pub mod message;
pub mod notifier;
pub mod process;
pub mod settings_dialog;
pub mod signals;
pub mod state;
pub mod timer;

// Re-export primary types
pub use cycle::CycleState;
pub use durations::Durations;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use keymap::{KeyBinding, KeyMap};
pub use message::Message;
pub use notifier::Notifier;
pub use settings_dialog::{SettingsDialogState, SettingsField};
pub use state::{ActiveView, AppState};
pub use timer::{Countdown, TickOutcome};
