//! Terminal event polling and the countdown tick source

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use pomo_app::message::Message;
use pomo_app::{Countdown, InputKey};
use pomo_core::prelude::*;

/// Longest time a single poll may block (keeps redraws at ~20 FPS)
pub const MAX_POLL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
///
/// Alt-modified characters have no binding and are dropped.
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Convert a terminal event into a message, if it maps to one
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}

/// Wait up to `timeout` for a terminal event
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if event::poll(timeout).context("Failed to poll terminal events")? {
        let event = event::read().context("Failed to read terminal event")?;
        Ok(event_to_message(event))
    } else {
        Ok(None)
    }
}

/// Fixed-cadence tick source for the countdown.
///
/// Armed while the countdown runs and disarmed while it is paused. A reset of
/// the countdown re-arms a running ticker, so the first tick always lands one
/// full interval after (re)starting.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
    generation: u64,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            generation: 0,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm, re-arm or disarm to match the countdown
    pub fn sync(&mut self, timer: &Countdown, now: Instant) {
        let restarted = timer.generation() != self.generation;
        self.generation = timer.generation();

        match (timer.is_running(), self.next_due) {
            (true, None) => self.next_due = Some(now + self.interval),
            (true, Some(_)) if restarted => self.next_due = Some(now + self.interval),
            (false, Some(_)) => self.next_due = None,
            _ => {}
        }
    }

    /// Consume one tick if it is due.
    ///
    /// After a long stall (e.g. the process was suspended) the schedule
    /// restarts from `now` instead of firing a burst of catch-up ticks.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                let next = due + self.interval;
                self.next_due = Some(if next <= now {
                    now + self.interval
                } else {
                    next
                });
                true
            }
            _ => false,
        }
    }

    /// How long the loop may block before the next tick, capped at `max`
    pub fn timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.next_due {
            Some(due) => due.saturating_duration_since(now).min(max),
            None => max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use pomo_app::{AppState, Durations};

    fn running_countdown() -> Countdown {
        let mut timer = Countdown::new(Duration::from_secs(60));
        timer.start();
        timer
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('s')));
    }

    #[test]
    fn test_ctrl_c_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_ctrl_with_shift_is_lowercased() {
        let key = KeyEvent::new(
            KeyCode::Char('C'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_alt_chars_are_dropped() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT);
        assert_eq!(key_event_to_input(key), None);

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::ALT | KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), None);
        assert_eq!(event_to_message(Event::Key(key)), None);
    }

    #[test]
    fn test_dialog_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(InputKey::Tab)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputKey::Esc)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputKey::Backspace)
        );
    }

    #[test]
    fn test_unsupported_key_ignored() {
        let key = KeyEvent::new(KeyCode::CapsLock, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_resize_event_becomes_message() {
        assert_eq!(
            event_to_message(Event::Resize(100, 30)),
            Some(Message::Resize {
                width: 100,
                height: 30
            })
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(Event::Key(key)), None);
    }

    #[test]
    fn test_key_press_becomes_message() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            event_to_message(Event::Key(key)),
            Some(Message::Key(InputKey::Enter))
        );
    }

    #[test]
    fn test_ticker_idle_until_armed() {
        let now = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        assert!(!ticker.is_armed());
        assert!(!ticker.take_due(now + Duration::from_secs(5)));
        assert_eq!(ticker.timeout(now, MAX_POLL), MAX_POLL);
    }

    #[test]
    fn test_ticker_first_tick_one_interval_after_start() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.sync(&running_countdown(), start);

        assert!(!ticker.take_due(start + Duration::from_millis(999)));
        assert!(ticker.take_due(start + Duration::from_secs(1)));
        assert!(!ticker.take_due(start + Duration::from_millis(1500)));
        assert!(ticker.take_due(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_ticker_sync_keeps_schedule_while_running() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.sync(&running_countdown(), start);
        ticker.sync(&running_countdown(), start + Duration::from_millis(600));
        assert!(ticker.take_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_ticker_disarms_on_pause_and_restarts_fresh() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.sync(&running_countdown(), start);
        let mut timer = running_countdown();
        timer.stop();
        ticker.sync(&timer, start + Duration::from_millis(500));
        assert!(!ticker.is_armed());

        let resume = start + Duration::from_secs(3);
        timer.start();
        ticker.sync(&timer, resume);
        assert!(!ticker.take_due(resume + Duration::from_millis(500)));
        assert!(ticker.take_due(resume + Duration::from_secs(1)));
    }

    #[test]
    fn test_ticker_does_not_burst_after_stall() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.sync(&running_countdown(), start);

        let late = start + Duration::from_secs(10);
        assert!(ticker.take_due(late));
        assert!(!ticker.take_due(late));
        assert!(ticker.take_due(late + Duration::from_secs(1)));
    }

    #[test]
    fn test_ticker_timeout_capped() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.sync(&running_countdown(), start);
        assert_eq!(ticker.timeout(start, MAX_POLL), MAX_POLL);
        assert_eq!(
            ticker.timeout(start + Duration::from_millis(980), MAX_POLL),
            Duration::from_millis(20)
        );
        assert_eq!(
            ticker.timeout(start + Duration::from_secs(2), MAX_POLL),
            Duration::ZERO
        );
    }

    #[test]
    fn test_ticker_rearms_when_settings_restart_the_timer() {
        let start = Instant::now();
        let mut state = AppState::new();
        state.timer.start();

        let mut ticker = Ticker::new(state.timer.tick_interval());
        ticker.sync(&state.timer, start);

        let saved = start + Duration::from_millis(900);
        state.apply_durations(Durations::from_minutes(30, 10, 20));
        ticker.sync(&state.timer, saved);

        // The old schedule would fire 100ms into the new interval
        assert!(!ticker.take_due(start + Duration::from_secs(1)));
        assert!(!ticker.take_due(saved + Duration::from_millis(999)));
        assert!(ticker.take_due(saved + Duration::from_secs(1)));
    }

    #[test]
    fn test_ticker_ignores_reset_while_paused() {
        let start = Instant::now();
        let mut timer = Countdown::new(Duration::from_secs(60));
        let mut ticker = Ticker::new(Duration::from_secs(1));

        timer.reset(Duration::from_secs(30));
        ticker.sync(&timer, start);
        assert!(!ticker.is_armed());

        // Starting later arms from the start time, not from the reset
        let resume = start + Duration::from_secs(5);
        timer.start();
        ticker.sync(&timer, resume);
        assert!(!ticker.take_due(resume + Duration::from_millis(999)));
        assert!(ticker.take_due(resume + Duration::from_secs(1)));
    }
}
