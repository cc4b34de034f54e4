//! Countdown and cycle transition handlers

use pomo_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;
use crate::timer::TickOutcome;

use super::{UpdateAction, UpdateResult};

/// Deliver one tick to the countdown
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    match state.timer.tick() {
        TickOutcome::TimedOut => UpdateResult::message(Message::TimerElapsed),
        TickOutcome::Ticked | TickOutcome::Idle => UpdateResult::none(),
    }
}

pub fn handle_toggle(state: &mut AppState) -> UpdateResult {
    state.timer.toggle();
    debug!(
        "Timer {} at {}",
        if state.timer.is_running() {
            "started"
        } else {
            "paused"
        },
        state.timer.display()
    );
    UpdateResult::none()
}

/// Advance the cycle after an interval completes.
///
/// The next interval is loaded paused; the user starts it explicitly.
pub fn handle_elapsed(state: &mut AppState) -> UpdateResult {
    let finished = state.cycle.phase;
    let next = state.cycle.advance();

    state.timer.reset(state.durations.for_phase(next));
    state.timer.stop();

    info!(
        "{} finished (work_count={}), next: {}",
        finished.label(),
        state.cycle.work_count,
        next.label()
    );

    UpdateResult::action(UpdateAction::Notify {
        message: next.notification_message().to_string(),
    })
}
