//! pomo - A terminal Pomodoro timer
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use pomo_app::config::{self, Settings};
use pomo_core::logging::{self, DEFAULT_LOG_FILE};
use pomo_core::prelude::*;

/// pomo - A terminal Pomodoro timer
#[derive(Parser, Debug)]
#[command(name = "pomo", version)]
#[command(about = "Work/rest interval timer for the terminal", long_about = None)]
struct Args {
    /// Debug log file (created if missing, appended to otherwise)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Settings file [default: <config dir>/pomo/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("pomo: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    // Before anything touches the terminal: an unopenable log is fatal
    logging::init(&args.log_file)?;

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let settings = load_settings(args.config);

    let result = pomo_tui::run(&settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

fn load_settings(path: Option<PathBuf>) -> Settings {
    match path.or_else(config::default_config_path) {
        Some(path) => {
            info!("Config file: {}", path.display());
            config::load_settings(&path)
        }
        None => {
            warn!("No config directory on this platform, using default settings");
            Settings::default()
        }
    }
}
