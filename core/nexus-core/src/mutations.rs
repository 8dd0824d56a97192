//! State transitions.
//!
//! Every transition borrows the current [`AppState`] and returns a new one.
//! Only the targeted collections get a fresh `Arc`; everything else is shared
//! with the input, so `Arc::ptr_eq` tells callers exactly what changed.
//!
//! Update and delete by an unknown id are no-ops: the targeted collection is
//! rebuilt with the same contents and nothing else happens.
//!
//! The bulk setters for projects, job applications and gym sessions are the
//! only transitions that also rewrite `goals`.

use crate::derive::{derive_career_goals, derive_gym_goals, derive_project_goals};
use crate::types::*;
use std::sync::Arc;

fn appended<T: Clone>(items: &[T], item: T) -> Arc<Vec<T>> {
    let mut next = items.to_vec();
    next.push(item);
    Arc::new(next)
}

fn mapped<T: Clone>(
    items: &[T],
    matches: impl Fn(&T) -> bool,
    update: impl Fn(&T) -> T,
) -> Arc<Vec<T>> {
    Arc::new(
        items
            .iter()
            .map(|item| {
                if matches(item) {
                    update(item)
                } else {
                    item.clone()
                }
            })
            .collect(),
    )
}

fn retained<T: Clone>(items: &[T], keep: impl Fn(&T) -> bool) -> Arc<Vec<T>> {
    Arc::new(items.iter().filter(|item| keep(item)).cloned().collect())
}

impl AppState {
    fn with(&self, change: impl FnOnce(&mut AppState)) -> AppState {
        let mut next = self.clone();
        change(&mut next);
        next
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Tasks
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_task(&self, task: Task) -> AppState {
        self.with(|s| s.tasks = appended(&s.tasks, task))
    }

    pub fn update_task(&self, id: &str, patch: &TaskPatch) -> AppState {
        self.with(|s| s.tasks = mapped(&s.tasks, |t| t.id == id, |t| patch.apply(t)))
    }

    pub fn delete_task(&self, id: &str) -> AppState {
        self.with(|s| s.tasks = retained(&s.tasks, |t| t.id != id))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Goals
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_goal(&self, goal: Goal) -> AppState {
        self.with(|s| s.goals = appended(&s.goals, goal))
    }

    /// Applies a user edit. On a project-sourced goal, progress and target
    /// stay as edited only until the next `set_projects`.
    pub fn update_goal(&self, id: &str, patch: &GoalPatch) -> AppState {
        self.with(|s| s.goals = mapped(&s.goals, |g| g.id == id, |g| patch.apply(g)))
    }

    pub fn delete_goal(&self, id: &str) -> AppState {
        self.with(|s| s.goals = retained(&s.goals, |g| g.id != id))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Habits
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_habit(&self, habit: Habit) -> AppState {
        self.with(|s| s.habits = appended(&s.habits, habit))
    }

    pub fn toggle_habit(&self, id: &str, today: &str) -> AppState {
        self.with(|s| {
            s.habits = mapped(&s.habits, |h| h.id == id, |h| crate::habits::toggle(h, today))
        })
    }

    pub fn delete_habit(&self, id: &str) -> AppState {
        self.with(|s| s.habits = retained(&s.habits, |h| h.id != id))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Dailies
    // ─────────────────────────────────────────────────────────────────────────────

    /// Flips `id` in the completion set for `date`, creating the day's entry
    /// on first use.
    pub fn toggle_daily(&self, id: &str, date: &str) -> AppState {
        self.with(|s| {
            let mut completions = (*s.daily_completions).clone();
            let done = completions.entry(date.to_string()).or_default();
            *done = crate::habits::toggle_membership(done, id);
            s.daily_completions = Arc::new(completions);
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Calendar Events
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_event(&self, event: CalendarEvent) -> AppState {
        self.with(|s| s.events = appended(&s.events, event))
    }

    pub fn update_event(&self, id: &str, patch: &EventPatch) -> AppState {
        self.with(|s| s.events = mapped(&s.events, |e| e.id == id, |e| patch.apply(e)))
    }

    pub fn delete_event(&self, id: &str) -> AppState {
        self.with(|s| s.events = retained(&s.events, |e| e.id != id))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Strategies (addressed by position)
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_strategy(&self, text: String) -> AppState {
        self.with(|s| s.strategies = appended(&s.strategies, text))
    }

    pub fn update_strategy(&self, index: usize, text: &str) -> AppState {
        self.with(|s| {
            s.strategies = Arc::new(
                s.strategies
                    .iter()
                    .enumerate()
                    .map(|(i, current)| if i == index { text.to_string() } else { current.clone() })
                    .collect(),
            )
        })
    }

    pub fn delete_strategy(&self, index: usize) -> AppState {
        self.with(|s| {
            s.strategies = Arc::new(
                s.strategies
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != index)
                    .map(|(_, text)| text.clone())
                    .collect(),
            )
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Inbox
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_capture(&self, capture: QuickCapture) -> AppState {
        self.with(|s| s.captures = appended(&s.captures, capture))
    }

    pub fn delete_capture(&self, id: &str) -> AppState {
        self.with(|s| s.captures = retained(&s.captures, |c| c.id != id))
    }

    /// Files the task produced from a capture and drops the capture, as one
    /// transition.
    pub fn convert_capture(&self, capture_id: &str, task: Task) -> AppState {
        self.add_task(task).delete_capture(capture_id)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Focus Sessions
    // ─────────────────────────────────────────────────────────────────────────────

    /// Category recorded for a focus session on `task_id`. Unlinked sessions
    /// and sessions on a task that no longer exists count as personal.
    pub fn focus_category(&self, task_id: Option<&str>) -> String {
        task_id
            .and_then(|id| self.task(id))
            .map(|t| t.category.as_str())
            .unwrap_or(TaskCategory::Personal.as_str())
            .to_string()
    }

    /// Appends a finished session and credits its task with one pomodoro.
    pub fn record_focus_session(&self, session: FocusSession) -> AppState {
        self.with(|s| {
            if let Some(task_id) = session.task_id.as_deref() {
                s.tasks = mapped(
                    &s.tasks,
                    |t| t.id == task_id,
                    |t| Task {
                        pomodoros: t.pomodoros + 1,
                        ..t.clone()
                    },
                );
            }
            s.sessions = appended(&s.sessions, session);
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Bulk Setters
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn set_projects(&self, projects: Vec<Project>) -> AppState {
        self.with(|s| {
            s.goals = Arc::new(derive_project_goals(&s.goals, &projects));
            s.projects = Arc::new(projects);
        })
    }

    pub fn set_job_applications(&self, applications: Vec<JobApplication>) -> AppState {
        self.with(|s| {
            s.goals = Arc::new(derive_career_goals(&s.goals, &applications));
            s.job_applications = Arc::new(applications);
        })
    }

    pub fn set_gym_sessions(&self, sessions: Vec<GymSession>) -> AppState {
        self.with(|s| {
            s.goals = Arc::new(derive_gym_goals(&s.goals, &sessions));
            s.gym_sessions = Arc::new(sessions);
        })
    }

    pub fn set_courses(&self, courses: Vec<Course>) -> AppState {
        self.with(|s| s.courses = Arc::new(courses))
    }

    pub fn set_extracurriculars(&self, extracurriculars: Vec<Extracurricular>) -> AppState {
        self.with(|s| s.extracurriculars = Arc::new(extracurriculars))
    }
}
