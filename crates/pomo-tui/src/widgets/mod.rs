//! Custom widget components

pub mod big_text;
mod help_bar;
pub mod modal_overlay;
mod progress_bar;
pub mod settings_dialog;

pub use big_text::BigText;
pub use help_bar::HelpBar;
pub use progress_bar::ProgressBar;
pub use settings_dialog::SettingsDialog;
