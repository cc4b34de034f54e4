//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "POMO_LOG";

/// Default debug log file name (relative to the working directory)
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// Initialize the logging subsystem
///
/// Opens `log_file` once (creating it if needed) and routes all tracing output
/// there, since the TUI owns stdout. Failing to open the file is fatal.
/// Log level is controlled by the `POMO_LOG` environment variable.
///
/// # Examples
/// ```bash
/// POMO_LOG=debug pomo
/// POMO_LOG=trace pomo --log-file /tmp/pomo.log
/// ```
pub fn init(log_file: &Path) -> Result<()> {
    let file_appender = open_appender(log_file)?;

    // Default to info, allow override via POMO_LOG
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::log_init(log_file, e.to_string()))?;

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("pomo starting");
    tracing::info!("Debug log: {}", log_file.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Build a non-rotating appender for exactly `log_file`.
fn open_appender(log_file: &Path) -> Result<RollingFileAppender> {
    let (dir, file_name) = split_log_path(log_file)?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&dir)
        .map_err(|e| Error::log_init(log_file, e.to_string()))
}

/// Split a log path into its directory (defaulting to `.`) and file name.
fn split_log_path(log_file: &Path) -> Result<(PathBuf, String)> {
    let file_name = log_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::log_init(log_file, "path has no file name"))?;

    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, file_name))
}
