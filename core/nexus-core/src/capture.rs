//! Quick-capture classification.
//!
//! Turns a line of inbox text into a task draft with a best-guess category,
//! course, priority and project link. Matching is case-insensitive keyword
//! search; later rules override earlier ones:
//!
//! 1. course: full course code, or its department prefix as a whole word
//! 2. career keywords
//! 3. extracurricular keywords or an extracurricular's name
//! 4. project keywords or a project's name (the latter also links the task)
//!
//! Anything unmatched is personal. "urgent" or "asap" makes it high priority.

use crate::patterns::{RE_CAREER, RE_COURSE_DEPT, RE_EC, RE_PROJECT, RE_URGENT};
use crate::types::{AppState, NewTask, Priority, QuickCapture, TaskCategory};

/// Names the classifier can recognize, taken from the current state.
#[derive(Debug, Clone, Default)]
pub struct CaptureContext {
    course_codes: Vec<String>,
    extracurriculars: Vec<String>,
    projects: Vec<(String, String)>,
}

impl CaptureContext {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            course_codes: state.courses.iter().map(|c| c.code.clone()).collect(),
            extracurriculars: state
                .extracurriculars
                .iter()
                .map(|ec| ec.name.to_lowercase())
                .collect(),
            projects: state
                .projects
                .iter()
                .map(|p| (p.id.clone(), p.name.to_lowercase()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: TaskCategory,
    pub course: Option<String>,
    pub priority: Priority,
    pub project_id: Option<String>,
}

pub fn classify(text: &str, ctx: &CaptureContext) -> Classification {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let mut category = TaskCategory::Personal;
    let mut project_id = None;

    let course = ctx
        .course_codes
        .iter()
        .find(|code| mentions_course(code, &lowered, &words))
        .cloned();
    if course.is_some() {
        category = TaskCategory::Course;
    }

    if RE_CAREER.is_match(&lowered) {
        category = TaskCategory::Career;
    }

    if RE_EC.is_match(&lowered)
        || ctx
            .extracurriculars
            .iter()
            .any(|name| lowered.contains(name.as_str()))
    {
        category = TaskCategory::Ec;
    }

    let named_project = ctx
        .projects
        .iter()
        .find(|(_, name)| !name.is_empty() && lowered.contains(name.as_str()));
    if let Some((id, _)) = named_project {
        category = TaskCategory::Project;
        project_id = Some(id.clone());
    } else if RE_PROJECT.is_match(&lowered) {
        category = TaskCategory::Project;
    }

    let priority = if RE_URGENT.is_match(&lowered) {
        Priority::High
    } else {
        Priority::Medium
    };

    Classification {
        category,
        course,
        priority,
        project_id,
    }
}

fn mentions_course(code: &str, lowered: &str, words: &[&str]) -> bool {
    let code = code.to_lowercase();
    if lowered.contains(code.as_str()) {
        return true;
    }
    RE_COURSE_DEPT
        .captures(&code)
        .map(|cap| words.contains(&&cap[1]))
        .unwrap_or(false)
}

/// Task draft for an inbox entry. The title is the capture text.
pub fn task_from_capture(capture: &QuickCapture, ctx: &CaptureContext) -> NewTask {
    let class = classify(&capture.text, ctx);
    NewTask {
        course: class.course,
        priority: class.priority,
        project_id: class.project_id,
        ..NewTask::new(capture.text.clone(), class.category)
    }
}
