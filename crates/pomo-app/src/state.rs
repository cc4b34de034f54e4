//! Application state (Model in TEA pattern)

use pomo_core::{AppPhase, Phase};

use crate::config::Settings;
use crate::cycle::CycleState;
use crate::durations::Durations;
use crate::keymap::KeyMap;
use crate::settings_dialog::SettingsDialogState;
use crate::timer::Countdown;

/// Which screen receives key input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Timer screen
    #[default]
    Main,

    /// Settings modal on top of the timer screen
    Settings(SettingsDialogState),
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application lifecycle
    pub phase: AppPhase,

    /// Countdown for the active interval
    pub timer: Countdown,

    /// Work/rest cycle position
    pub cycle: CycleState,

    /// Active interval lengths
    pub durations: Durations,

    /// Screen receiving input
    pub view: ActiveView,

    /// Main-view key bindings (immutable after startup)
    pub keymap: KeyMap,

    /// Show the title banner
    pub show_title: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with default durations and key bindings; the timer starts paused
    pub fn new() -> Self {
        let durations = Durations::default();
        Self {
            phase: AppPhase::Running,
            timer: Countdown::new(durations.work),
            cycle: CycleState::new(),
            durations,
            view: ActiveView::Main,
            keymap: KeyMap::default(),
            show_title: true,
        }
    }

    /// State configured from loaded settings
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            keymap: KeyMap::from_settings(&settings.keys),
            show_title: settings.ui.show_title,
            ..Self::new()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Current cycle phase
    pub fn current_phase(&self) -> Phase {
        self.cycle.phase
    }

    pub fn is_settings_open(&self) -> bool {
        matches!(self.view, ActiveView::Settings(_))
    }

    pub fn settings_dialog(&self) -> Option<&SettingsDialogState> {
        match &self.view {
            ActiveView::Settings(dialog) => Some(dialog),
            ActiveView::Main => None,
        }
    }

    pub fn settings_dialog_mut(&mut self) -> Option<&mut SettingsDialogState> {
        match &mut self.view {
            ActiveView::Settings(dialog) => Some(dialog),
            ActiveView::Main => None,
        }
    }

    /// Open the settings dialog seeded from the live durations
    pub fn open_settings(&mut self) {
        self.view = ActiveView::Settings(SettingsDialogState::new(&self.durations));
    }

    /// Discard the dialog (if any)
    pub fn close_settings(&mut self) {
        self.view = ActiveView::Main;
    }

    /// Replace durations and restart with a running work interval.
    ///
    /// Completion counters are kept.
    pub fn apply_durations(&mut self, durations: Durations) {
        self.durations = durations;
        self.cycle.restart_work();
        self.timer.reset(durations.work);
        self.timer.start();
    }
}
