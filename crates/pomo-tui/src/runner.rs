//! Main TUI runner - entry point and event loop

use std::time::Instant;

use tokio::sync::mpsc;

use pomo_app::config::Settings;
use pomo_app::message::Message;
use pomo_app::state::AppState;
use pomo_app::{process, signals, Notifier};
use pomo_core::prelude::*;

use super::event::{self, Ticker, MAX_POLL};
use super::{render, terminal};

/// Run the timer until the user quits
pub async fn run(settings: &Settings) -> Result<()> {
    terminal::install_panic_hook();

    let notifier = Notifier::from_settings(&settings.notify);
    info!(
        "Notifications {}",
        if notifier.is_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );

    let mut term = terminal::init()?;

    let mut state = AppState::with_settings(settings);

    // Unified message channel for out-of-band sources (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, &notifier);

    terminal::restore();
    info!("pomo exiting");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    notifier: &Notifier,
) -> Result<()> {
    let mut ticker = Ticker::new(state.timer.tick_interval());

    while !state.should_quit() {
        // External messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, notifier);
        }

        // Countdown tick
        ticker.sync(&state.timer, Instant::now());
        if ticker.take_due(Instant::now()) {
            process::process_message(state, Message::Tick, notifier);
            ticker.sync(&state.timer, Instant::now());
        }

        if state.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Terminal events, blocking at most until the next tick is due
        let timeout = ticker.timeout(Instant::now(), MAX_POLL);
        if let Some(message) = event::poll(timeout)? {
            process::process_message(state, message, notifier);
        }
    }

    Ok(())
}
