//! Work/rest cycle state machine

use pomo_core::Phase;

/// Every n-th completed work interval is followed by a long rest
pub const LONG_REST_EVERY: u32 = 4;

/// Current phase plus completion counters.
///
/// Only mutated when an interval elapses ([`CycleState::advance`]) or when new
/// settings restart the cycle ([`CycleState::restart_work`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleState {
    pub phase: Phase,
    /// Completed work intervals
    pub work_count: u32,
    /// Completed short rests
    pub short_rest_count: u32,
    /// Completed long rests
    pub long_rest_count: u32,
}

impl CycleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record completion of the current phase and move to the next one.
    ///
    /// Returns the new phase.
    pub fn advance(&mut self) -> Phase {
        let next = match self.phase {
            Phase::Work => {
                self.work_count += 1;
                rest_after(self.work_count)
            }
            Phase::ShortRest => {
                self.short_rest_count += 1;
                Phase::Work
            }
            Phase::LongRest => {
                self.long_rest_count += 1;
                Phase::Work
            }
        };
        self.phase = next;
        next
    }

    /// Jump back to a work interval, keeping all counters
    pub fn restart_work(&mut self) {
        self.phase = Phase::Work;
    }

    /// Position of the current work interval within its set of four (1-based)
    pub fn set_position(&self) -> u32 {
        self.work_count % LONG_REST_EVERY + 1
    }
}

/// Rest kind that follows the `work_count`-th completed work interval
pub fn rest_after(work_count: u32) -> Phase {
    if work_count != 0 && work_count % LONG_REST_EVERY == 0 {
        Phase::LongRest
    } else {
        Phase::ShortRest
    }
}
