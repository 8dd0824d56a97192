//! Habit and daily-checklist toggles.
//!
//! ```text
//! not-done-today ──toggle──▶ done-today      history += today, streak += 1
//! done-today     ──toggle──▶ not-done-today  history -= today, streak -= 1 (floor 0)
//! ```
//!
//! The streak is a counter moved by the toggle. It is not recomputed from
//! `history`, so gaps between days are not detected.

use crate::types::Habit;

pub fn is_done_on(habit: &Habit, date: &str) -> bool {
    habit.history.iter().any(|d| d == date)
}

pub fn toggle(habit: &Habit, today: &str) -> Habit {
    let done = is_done_on(habit, today);
    Habit {
        history: toggle_membership(&habit.history, today),
        streak: if done {
            habit.streak.saturating_sub(1)
        } else {
            habit.streak + 1
        },
        ..habit.clone()
    }
}

/// Removes every copy of `value` if present, otherwise appends it.
pub fn toggle_membership(values: &[String], value: &str) -> Vec<String> {
    if values.iter().any(|v| v == value) {
        values.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = values.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Whether each of the `days` (oldest first) is in the habit's history.
pub fn week_strip(habit: &Habit, days: &[String]) -> Vec<bool> {
    days.iter().map(|d| is_done_on(habit, d)).collect()
}
