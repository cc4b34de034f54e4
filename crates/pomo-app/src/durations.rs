//! Interval lengths for each phase

use std::time::Duration;

use pomo_core::Phase;

pub const DEFAULT_WORK_MINUTES: u64 = 25;
pub const DEFAULT_SHORT_REST_MINUTES: u64 = 5;
pub const DEFAULT_LONG_REST_MINUTES: u64 = 15;

/// Active interval lengths. Replaced as a whole when settings are saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub work: Duration,
    pub short_rest: Duration,
    pub long_rest: Duration,
}

impl Default for Durations {
    fn default() -> Self {
        Self::from_minutes(
            DEFAULT_WORK_MINUTES,
            DEFAULT_SHORT_REST_MINUTES,
            DEFAULT_LONG_REST_MINUTES,
        )
    }
}

impl Durations {
    pub fn from_minutes(work: u64, short_rest: u64, long_rest: u64) -> Self {
        Self {
            work: minutes(work),
            short_rest: minutes(short_rest),
            long_rest: minutes(long_rest),
        }
    }

    /// Interval length for `phase`
    pub fn for_phase(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Work => self.work,
            Phase::ShortRest => self.short_rest,
            Phase::LongRest => self.long_rest,
        }
    }
}

pub fn minutes(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

/// Whole minutes in `d`, truncated
pub fn whole_minutes(d: Duration) -> u64 {
    d.as_secs() / 60
}
