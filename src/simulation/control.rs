//! Run-state machine and the session that drives ticks through it.

use super::colony::{Colony, TickReport};
use super::config::Config;
use super::scheduler::Scheduler;

/// Whether the simulation advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Ticks advance.
    #[default]
    Running,
    /// Ticks are skipped.
    Paused,
    /// An options menu is open; ticks are skipped.
    Menu {
        /// State to return to when the menu closes.
        resume: Resume,
    },
}

/// Non-menu state remembered while a menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    /// Return to [`RunState::Running`].
    Running,
    /// Return to [`RunState::Paused`].
    Paused,
}

/// Named inputs that drive [`RunState`] transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Running ⇄ Paused. Ignored while a menu is open.
    TogglePause,
    /// Open the options menu.
    OpenMenu,
    /// Close the options menu.
    CloseMenu,
}

impl RunState {
    /// The state after `event`.
    pub fn on(self, event: ControlEvent) -> Self {
        match (self, event) {
            (RunState::Running, ControlEvent::TogglePause) => RunState::Paused,
            (RunState::Paused, ControlEvent::TogglePause) => RunState::Running,
            (RunState::Running, ControlEvent::OpenMenu) => RunState::Menu {
                resume: Resume::Running,
            },
            (RunState::Paused, ControlEvent::OpenMenu) => RunState::Menu {
                resume: Resume::Paused,
            },
            (RunState::Menu { resume }, ControlEvent::CloseMenu) => match resume {
                Resume::Running => RunState::Running,
                Resume::Paused => RunState::Paused,
            },
            (state, _) => state,
        }
    }

    /// Whether a tick should run in this state.
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// A colony together with its scheduler, live config and run state.
pub struct Session {
    /// Simulation state.
    pub colony: Colony,
    /// Tunables, read fresh every tick.
    pub config: Config,
    /// Current run state.
    pub state: RunState,
    scheduler: Scheduler,
}

impl Session {
    /// Creates a running session.
    pub fn new(colony: Colony, config: Config, scheduler: Scheduler) -> Self {
        Self {
            colony,
            config,
            state: RunState::Running,
            scheduler,
        }
    }

    /// Applies a control event.
    pub fn handle(&mut self, event: ControlEvent) {
        let next = self.state.on(event);
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "run state changed");
        }
        self.state = next;
    }

    /// Runs one tick if running; returns `None` when the tick was skipped.
    pub fn advance(&mut self) -> Option<TickReport> {
        if !self.state.is_running() {
            return None;
        }
        Some(self.colony.step(&self.scheduler, &self.config))
    }

    /// The scheduler driving this session.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}
