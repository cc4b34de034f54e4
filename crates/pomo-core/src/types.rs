//! Core domain type definitions

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Event loop is running
    #[default]
    Running,
    /// Application is shutting down
    Quitting,
}

/// The kind of interval currently being timed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Focused work interval
    #[default]
    Work,
    /// Short break between work intervals
    ShortRest,
    /// Long break after every fourth work interval
    LongRest,
}

impl Phase {
    /// Short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::ShortRest => "Short rest",
            Phase::LongRest => "Long rest",
        }
    }

    /// Desktop notification text announcing that this phase begins
    pub fn notification_message(&self) -> &'static str {
        match self {
            Phase::Work => "Time to work!",
            Phase::ShortRest => "Time to take a short rest!",
            Phase::LongRest => "Time to take a long rest!",
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Phase::ShortRest | Phase::LongRest)
    }
}
