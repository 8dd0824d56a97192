//! Pomodoro focus timer.
//!
//! ```text
//!            start                    toggle_pause
//!   Idle ─────────────▶ Running ◀──────────────────▶ Paused
//!    ▲                    │  │                          │
//!    │   tick at 0:01     │  │ stop                     │ stop
//!    └────────────────────┘  └──────────────────────────┴──▶ Idle
//! ```
//!
//! The timer knows nothing about wall-clock time: the owner calls [`FocusTimer::tick`]
//! once per elapsed second while it is running. Ticks received while idle or
//! paused are ignored, so a paused countdown neither loses nor gains seconds.
//!
//! Natural completion yields a [`TimerCompletion`]; a manual stop yields nothing.

/// Length of one focus block in seconds.
pub const FOCUS_SECONDS: u32 = 25 * 60;

/// Length of one focus block in minutes, as recorded on a session.
pub const FOCUS_MINUTES: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Emitted once when a countdown reaches zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerCompletion {
    pub task_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    status: TimerStatus,
    remaining: u32,
    task_id: Option<String>,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            status: TimerStatus::Idle,
            remaining: FOCUS_SECONDS,
            task_id: None,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.status != TimerStatus::Idle
    }

    /// Starts a countdown from idle. Returns false (and changes nothing) if a
    /// countdown is already running or paused.
    pub fn start(&mut self, task_id: Option<String>) -> bool {
        if self.is_active() {
            return false;
        }
        self.status = TimerStatus::Running;
        self.remaining = FOCUS_SECONDS;
        self.task_id = task_id;
        true
    }

    /// Changes the linked task without touching the countdown.
    pub fn link_task(&mut self, task_id: Option<String>) {
        self.task_id = task_id;
    }

    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            TimerStatus::Running => TimerStatus::Paused,
            TimerStatus::Paused => TimerStatus::Running,
            TimerStatus::Idle => TimerStatus::Idle,
        };
    }

    /// Abandons the countdown. No session is produced.
    pub fn stop(&mut self) {
        self.status = TimerStatus::Idle;
        self.remaining = FOCUS_SECONDS;
    }

    /// Advances one second.
    pub fn tick(&mut self) -> Option<TimerCompletion> {
        if self.status != TimerStatus::Running {
            return None;
        }
        if self.remaining <= 1 {
            self.status = TimerStatus::Idle;
            self.remaining = FOCUS_SECONDS;
            return Some(TimerCompletion {
                task_id: self.task_id.clone(),
            });
        }
        self.remaining -= 1;
        None
    }

    /// Share of the block still to go, 100 at start.
    pub fn percent_remaining(&self) -> f64 {
        f64::from(self.remaining) / f64::from(FOCUS_SECONDS) * 100.0
    }

    /// `MM:SS` display of the remaining time.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

/// Best-effort user notification for a finished block.
///
/// Implementations report failure (no permission, no display) through the
/// `Err` string; the caller logs it and carries on.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), String>;
}

/// Notifier that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _title: &str, _body: &str) -> Result<(), String> {
        Ok(())
    }
}
