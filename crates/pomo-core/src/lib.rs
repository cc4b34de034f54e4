//! # pomo-core - Core Domain Types
//!
//! Foundation crate for pomo. Provides the phase types shared by the app and
//! TUI layers, the error type, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, tracing-subscriber, tracing-appender).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Phase`] - Pomodoro interval kind (Work, ShortRest, LongRest)
//! - [`AppPhase`] - Application lifecycle phase (Running, Quitting)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum organized by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - Open the debug log and install the tracing subscriber
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pomo_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all pomo crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{AppPhase, Phase};
