//! Countdown timer driven by external ticks
//!
//! The countdown never reads the clock itself. The runtime shell delivers one
//! [`Countdown::tick`] per tick interval while the countdown is running, which
//! keeps every transition deterministic and unit-testable.

use std::time::Duration;

/// Wall-clock cadence of the countdown
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Result of delivering one tick to a [`Countdown`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or already at zero; nothing changed
    Idle,
    /// Remaining time decreased and is still above zero
    Ticked,
    /// Remaining time just reached zero
    TimedOut,
}

/// Remaining-time countdown for the active interval.
///
/// Invariant: `remaining <= interval`. `remaining` only decreases while
/// running and saturates at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: Duration,
    interval: Duration,
    tick: Duration,
    running: bool,
    /// Bumped by every [`Countdown::reset`]
    generation: u64,
}

impl Countdown {
    /// Create a stopped countdown for `interval` with the default 1s tick
    pub fn new(interval: Duration) -> Self {
        Self::with_tick(interval, DEFAULT_TICK)
    }

    /// Create a stopped countdown with a custom tick unit
    pub fn with_tick(interval: Duration, tick: Duration) -> Self {
        Self {
            remaining: interval,
            interval,
            tick,
            running: false,
            generation: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Advance by one tick unit if running.
    ///
    /// Returns [`TickOutcome::TimedOut`] exactly once, on the tick that brings
    /// `remaining` to zero. Further ticks are [`TickOutcome::Idle`] until
    /// [`Countdown::reset`].
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.remaining.is_zero() {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(self.tick);
        if self.remaining.is_zero() {
            TickOutcome::TimedOut
        } else {
            TickOutcome::Ticked
        }
    }

    /// Replace interval and remaining time; the running flag is untouched.
    ///
    /// Starts a new generation so tick sources can restart their schedule.
    pub fn reset(&mut self, interval: Duration) {
        self.interval = interval;
        self.remaining = interval;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    /// Number of resets so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn timed_out(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Fraction of the interval still remaining, in `[0.0, 1.0]`.
    ///
    /// A zero-length interval reports `0.0`.
    pub fn progress(&self) -> f64 {
        if self.interval.is_zero() {
            return 0.0;
        }
        (self.remaining.as_secs_f64() / self.interval.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Remaining time as `MM:SS` (minutes are not wrapped into hours)
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}

/// Format a duration as `MM:SS`, rounding partial seconds up
pub fn format_clock(d: Duration) -> String {
    let mut secs = d.as_secs();
    if d.subsec_nanos() > 0 {
        secs += 1;
    }
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mins(m: u64) -> Duration {
        Duration::from_secs(m * 60)
    }

    #[test]
    fn test_new_countdown_is_stopped_and_full() {
        let c = Countdown::new(mins(25));
        assert!(!c.is_running());
        assert_eq!(c.remaining(), mins(25));
        assert_eq!(c.interval(), mins(25));
        assert_eq!(c.tick_interval(), DEFAULT_TICK);
    }

    #[test]
    fn test_start_stop_are_idempotent() {
        let mut c = Countdown::new(mins(1));
        c.start();
        c.start();
        assert!(c.is_running());
        c.stop();
        c.stop();
        assert!(!c.is_running());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut c = Countdown::new(mins(1));
        c.toggle();
        assert!(c.is_running());
        c.toggle();
        assert!(!c.is_running());

        c.start();
        c.toggle();
        c.toggle();
        assert!(c.is_running());
    }

    #[test]
    fn test_ticks_decrement_while_running() {
        let d = Duration::from_secs(10);
        for n in 0..=10u64 {
            let mut c = Countdown::new(d);
            c.start();
            for _ in 0..n {
                c.tick();
            }
            assert_eq!(c.remaining(), d - Duration::from_secs(n));
            assert!(c.is_running());
        }
    }

    #[test]
    fn test_ticks_ignored_while_stopped() {
        let mut c = Countdown::new(Duration::from_secs(5));
        assert_eq!(c.tick(), TickOutcome::Idle);
        assert_eq!(c.remaining(), Duration::from_secs(5));
    }

    #[test]
    fn test_remaining_never_negative() {
        let d = Duration::from_secs(3);
        for n in 0..10u64 {
            let mut c = Countdown::new(d);
            c.start();
            for _ in 0..n {
                c.tick();
            }
            assert_eq!(c.remaining(), d.saturating_sub(Duration::from_secs(n)));
        }
    }

    #[test]
    fn test_timeout_emitted_once() {
        let mut c = Countdown::new(Duration::from_secs(2));
        c.start();
        assert_eq!(c.tick(), TickOutcome::Ticked);
        assert_eq!(c.tick(), TickOutcome::TimedOut);
        assert_eq!(c.tick(), TickOutcome::Idle);
        assert_eq!(c.tick(), TickOutcome::Idle);
        assert!(c.timed_out());
    }

    #[test]
    fn test_partial_tick_floors_at_zero() {
        let mut c = Countdown::new(Duration::from_millis(1500));
        c.start();
        assert_eq!(c.tick(), TickOutcome::Ticked);
        assert_eq!(c.tick(), TickOutcome::TimedOut);
        assert_eq!(c.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_reset_keeps_running_flag() {
        let mut c = Countdown::new(mins(25));
        c.start();
        c.tick();
        c.reset(mins(5));
        assert!(c.is_running());
        assert_eq!(c.remaining(), mins(5));
        assert_eq!(c.interval(), mins(5));

        c.stop();
        c.reset(mins(15));
        assert!(!c.is_running());
    }

    #[test]
    fn test_reset_starts_new_generation() {
        let mut c = Countdown::new(mins(25));
        assert_eq!(c.generation(), 0);
        c.start();
        c.tick();
        c.toggle();
        assert_eq!(c.generation(), 0);

        c.reset(mins(5));
        c.reset(mins(5));
        assert_eq!(c.generation(), 2);
    }

    #[test]
    fn test_progress_bounds() {
        let mut c = Countdown::new(Duration::from_secs(4));
        assert_eq!(c.progress(), 1.0);
        c.start();
        c.tick();
        assert_eq!(c.progress(), 0.75);
        for _ in 0..3 {
            c.tick();
        }
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_progress_zero_interval() {
        let c = Countdown::new(Duration::ZERO);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Countdown::new(mins(25)).display(), "25:00");
        assert_eq!(format_clock(Duration::from_secs(59)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(125 * 60)), "125:00");
        assert_eq!(format_clock(Duration::from_millis(500)), "00:01");
    }
}
