//! Read-only dashboard figures derived from an [`AppState`].
//!
//! Nothing here is stored; every figure is recomputed from the collections on
//! demand.

use crate::defaults::DEFAULT_QUOTES;
use crate::habits::is_done_on;
use crate::types::{AppState, Course, Task, TaskCategory};
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

const UPCOMING_LIMIT: usize = 5;
const SEARCH_LIMIT: usize = 5;

fn due_date(task: &Task) -> Option<NaiveDate> {
    task.due
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// Earlier due first; undated (or unparsable) last.
fn cmp_due(a: &Task, b: &Task) -> Ordering {
    match (due_date(a), due_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Open tasks, highest priority first, then earliest due date.
pub fn focus_queue(state: &AppState) -> Vec<&Task> {
    let mut open: Vec<&Task> = state.tasks.iter().filter(|t| !t.completed).collect();
    open.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| cmp_due(a, b))
    });
    open
}

/// The task to work on next.
pub fn do_next(state: &AppState) -> Option<&Task> {
    focus_queue(state).into_iter().next()
}

/// The nearest open deadlines.
pub fn upcoming_deadlines(state: &AppState) -> Vec<&Task> {
    let mut dated: Vec<&Task> = state
        .tasks
        .iter()
        .filter(|t| !t.completed && due_date(t).is_some())
        .collect();
    dated.sort_by(|a, b| cmp_due(a, b));
    dated.truncate(UPCOMING_LIMIT);
    dated
}

/// Case-insensitive title search.
pub fn search_tasks<'a>(state: &'a AppState, query: &str) -> Vec<&'a Task> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    state
        .tasks
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&q))
        .take(SEARCH_LIMIT)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodaySummary {
    pub tasks_due: usize,
    pub tasks_completed: usize,
    pub focus_minutes: u32,
    pub habits_done: usize,
    pub dailies_done: usize,
}

pub fn today_summary(state: &AppState, today: &str) -> TodaySummary {
    let due_today: Vec<&Task> = state
        .tasks
        .iter()
        .filter(|t| t.due.as_deref() == Some(today))
        .collect();
    TodaySummary {
        tasks_due: due_today.len(),
        tasks_completed: due_today.iter().filter(|t| t.completed).count(),
        focus_minutes: state
            .sessions
            .iter()
            .filter(|s| s.completed_at.starts_with(today))
            .map(|s| s.duration)
            .sum(),
        habits_done: state.habits.iter().filter(|h| is_done_on(h, today)).count(),
        dailies_done: state.dailies_done_on(today).len(),
    }
}

/// Total focus minutes per board category, in board order.
pub fn focus_by_category(state: &AppState) -> Vec<(TaskCategory, u32)> {
    TaskCategory::BOARD
        .iter()
        .map(|cat| {
            let minutes = state
                .sessions
                .iter()
                .filter(|s| s.category == cat.as_str())
                .map(|s| s.duration)
                .sum();
            (*cat, minutes)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseProgress {
    pub lectures_studied: usize,
    pub lectures_total: usize,
    pub homework_done: usize,
    pub homework_total: usize,
    pub exams_ready: usize,
    pub exams_total: usize,
}

pub fn course_progress(course: &Course) -> CourseProgress {
    CourseProgress {
        lectures_studied: course.lectures.iter().filter(|l| l.studied).count(),
        lectures_total: course.lectures.len(),
        homework_done: course.homeworks.iter().filter(|h| h.completed).count(),
        homework_total: course.homeworks.len(),
        exams_ready: course.exams.iter().filter(|e| e.prep_status.is_ready()).count(),
        exams_total: course.exams.len(),
    }
}

/// Quote of the day: one per UTC day, cycling through the saved quotes or a
/// built-in list when there are none.
pub fn daily_quote(state: &AppState, now: DateTime<Utc>) -> String {
    let day = now.timestamp().div_euclid(86_400).unsigned_abs();
    if state.motivational_quotes.is_empty() {
        let index = (day % DEFAULT_QUOTES.len() as u64) as usize;
        DEFAULT_QUOTES[index].to_string()
    } else {
        let index = (day % state.motivational_quotes.len() as u64) as usize;
        state.motivational_quotes[index].clone()
    }
}

/// Time-of-day greeting for a local hour (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FocusSession, NewTask, Priority};
    use chrono::TimeZone;
    use std::sync::Arc;

    fn task(id: &str, priority: Priority, due: Option<&str>, completed: bool) -> Task {
        let mut t = NewTask::new(id, TaskCategory::Personal).into_task(id.into());
        t.priority = priority;
        t.due = due.map(String::from);
        t.completed = completed;
        t
    }

    fn session(category: &str, completed_at: &str) -> FocusSession {
        FocusSession {
            id: completed_at.into(),
            task_id: None,
            duration: 25,
            completed_at: completed_at.into(),
            category: category.into(),
        }
    }

    fn state_with(tasks: Vec<Task>) -> AppState {
        let mut state = AppState::empty();
        state.tasks = Arc::new(tasks);
        state
    }

    #[test]
    fn test_focus_queue_orders_by_priority_then_due() {
        let state = state_with(vec![
            task("low", Priority::Low, Some("2026-01-01"), false),
            task("med-late", Priority::Medium, Some("2026-02-01"), false),
            task("med-undated", Priority::Medium, None, false),
            task("med-early", Priority::Medium, Some("2026-01-05"), false),
            task("high", Priority::High, None, false),
            task("done", Priority::High, None, true),
        ]);

        let ids: Vec<&str> = focus_queue(&state).iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, vec!["high", "med-early", "med-late", "med-undated", "low"]);
        assert_eq!(do_next(&state).map(|t| t.id.as_str()), Some("high"));
    }

    #[test]
    fn test_upcoming_deadlines_limits_to_five() {
        let tasks = (1..=7)
            .rev()
            .map(|d| {
                let due = format!("2026-01-0{}", d);
                task(&format!("t{}", d), Priority::Medium, Some(&due), false)
            })
            .collect();
        let state = state_with(tasks);

        let ids: Vec<&str> = upcoming_deadlines(&state)
            .iter()
            .map(|t| t.id.as_str())
            .collect();

        assert_eq!(ids, vec!["t1", "t2", "t3", "t4", "t5"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let state = state_with(vec![
            task("Lab Report", Priority::Medium, None, false),
            task("lab prep", Priority::Medium, None, false),
            task("Essay", Priority::Medium, None, false),
        ]);
        assert_eq!(search_tasks(&state, "LAB").len(), 2);
        assert!(search_tasks(&state, "  ").is_empty());
    }

    #[test]
    fn test_today_summary() {
        let mut state = state_with(vec![
            task("a", Priority::Medium, Some("2026-01-02"), true),
            task("b", Priority::Medium, Some("2026-01-02"), false),
            task("c", Priority::Medium, Some("2026-01-03"), true),
        ]);
        state.sessions = Arc::new(vec![
            session("course", "2026-01-02T09:00:00Z"),
            session("course", "2026-01-02T11:00:00Z"),
            session("course", "2026-01-01T11:00:00Z"),
        ]);
        let state = state.toggle_daily("d1", "2026-01-02");

        let summary = today_summary(&state, "2026-01-02");

        assert_eq!(summary.tasks_due, 2);
        assert_eq!(summary.tasks_completed, 1);
        assert_eq!(summary.focus_minutes, 50);
        assert_eq!(summary.habits_done, 0);
        assert_eq!(summary.dailies_done, 1);
    }

    #[test]
    fn test_focus_by_category() {
        let mut state = AppState::empty();
        state.sessions = Arc::new(vec![
            session("career", "2026-01-02T09:00:00Z"),
            session("career", "2026-01-02T10:00:00Z"),
            session("personal", "2026-01-02T11:00:00Z"),
        ]);

        let totals = focus_by_category(&state);

        assert!(totals.contains(&(TaskCategory::Career, 50)));
        assert!(totals.contains(&(TaskCategory::Personal, 25)));
        assert!(totals.contains(&(TaskCategory::Course, 0)));
    }

    #[test]
    fn test_course_progress() {
        let state = crate::defaults::default_state_for("2026-01-01");
        let progress = course_progress(&state.courses[0]);
        assert_eq!(progress.lectures_studied, 1);
        assert_eq!(progress.lectures_total, 2);
        assert_eq!(progress.homework_done, 0);
        assert_eq!(progress.exams_ready, 0);
        assert_eq!(progress.exams_total, 1);
    }

    #[test]
    fn test_daily_quote_cycles_per_day() {
        let mut state = AppState::empty();
        state.motivational_quotes = Arc::new(vec!["a".into(), "b".into()]);
        let day0 = Utc.with_ymd_and_hms(1970, 1, 1, 12, 0, 0).unwrap();
        let day1 = Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap();

        assert_eq!(daily_quote(&state, day0), "a");
        assert_eq!(daily_quote(&state, day1), "b");
    }

    #[test]
    fn test_daily_quote_falls_back_to_builtin() {
        let state = AppState::empty();
        let day0 = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(daily_quote(&state, day0), DEFAULT_QUOTES[0]);
    }

    #[test]
    fn test_greeting_for_hour() {
        assert_eq!(greeting_for_hour(8), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(20), "Good evening");
    }
}
