//! Core types shared by every Nexus client.
//!
//! The serialized shape is the on-disk document format: field names are
//! camelCase and every collection hangs off [`AppState`]. Dates are kept as the
//! ISO strings the user sees (`YYYY-MM-DD`, RFC 3339 for timestamps) because the
//! saved document is human-editable and never validated on load.
//!
//! Cross-entity links (`Task::project_id`, `Goal::project_id`, `Project::goal_id`)
//! are plain ids. A lookup may fail; callers treat that as "nothing to do".

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// ═══════════════════════════════════════════════════════════════════════════════
// Tasks
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Course,
    Project,
    Ec,
    Career,
    Personal,
    Capture,
    Daily,
}

impl TaskCategory {
    /// Categories shown on the board and in the focus breakdown.
    pub const BOARD: [TaskCategory; 5] = [
        TaskCategory::Course,
        TaskCategory::Career,
        TaskCategory::Project,
        TaskCategory::Ec,
        TaskCategory::Personal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Course => "course",
            TaskCategory::Project => "project",
            TaskCategory::Ec => "ec",
            TaskCategory::Career => "career",
            TaskCategory::Personal => "personal",
            TaskCategory::Capture => "capture",
            TaskCategory::Daily => "daily",
        }
    }
}

impl FromStr for TaskCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "course" => Ok(TaskCategory::Course),
            "project" => Ok(TaskCategory::Project),
            "ec" => Ok(TaskCategory::Ec),
            "career" => Ok(TaskCategory::Career),
            "personal" => Ok(TaskCategory::Personal),
            "capture" => Ok(TaskCategory::Capture),
            "daily" => Ok(TaskCategory::Daily),
            other => Err(format!("unknown task category: {}", other)),
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: lower comes first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    #[serde(rename = "none")]
    Never,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub category: TaskCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub pomodoros: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Everything needed to create a task; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub category: TaskCategory,
    pub course: Option<String>,
    pub priority: Priority,
    pub due: Option<String>,
    pub tags: Vec<String>,
    pub recurrence: Option<Recurrence>,
    pub project_id: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            title: title.into(),
            category,
            course: None,
            priority: Priority::Medium,
            due: None,
            tags: Vec::new(),
            recurrence: None,
            project_id: None,
        }
    }

    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            category: self.category,
            course: self.course,
            priority: self.priority,
            due: self.due,
            completed: false,
            pomodoros: 0,
            tags: self.tags,
            recurrence: self.recurrence,
            project_id: self.project_id,
        }
    }
}

/// Partial task edit. `None` leaves a field alone; for optional fields
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub category: Option<TaskCategory>,
    pub course: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub due: Option<Option<String>>,
    pub completed: Option<bool>,
    pub pomodoros: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub recurrence: Option<Option<Recurrence>>,
    pub project_id: Option<Option<String>>,
}

impl TaskPatch {
    pub fn completed(done: bool) -> Self {
        Self {
            completed: Some(done),
            ..Self::default()
        }
    }

    pub fn apply(&self, task: &Task) -> Task {
        let mut next = task.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(category) = self.category {
            next.category = category;
        }
        if let Some(course) = &self.course {
            next.course = course.clone();
        }
        if let Some(priority) = self.priority {
            next.priority = priority;
        }
        if let Some(due) = &self.due {
            next.due = due.clone();
        }
        if let Some(completed) = self.completed {
            next.completed = completed;
        }
        if let Some(pomodoros) = self.pomodoros {
            next.pomodoros = pomodoros;
        }
        if let Some(tags) = &self.tags {
            next.tags = tags.clone();
        }
        if let Some(recurrence) = self.recurrence {
            next.recurrence = recurrence;
        }
        if let Some(project_id) = &self.project_id {
            next.project_id = project_id.clone();
        }
        next
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Goals
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Career,
    Project,
    Gym,
    Study,
    Personal,
}

/// Who owns a goal's progress. `Project` and `Career` goals are recomputed by
/// the derivation pass; `Manual` (or absent) goals are edited by the user.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalSource {
    Project,
    Career,
    Manual,
}

/// Explicit binding of a career goal to one of the application counters.
///
/// Optional so that documents written before the field existed keep loading;
/// goals without it fall back to title matching.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CareerMetric {
    ApplicationsSent,
    OffersReceived,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub category: GoalCategory,
    pub progress: f64,
    pub target: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<GoalSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<CareerMetric>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub title: String,
    pub category: GoalCategory,
    pub progress: f64,
    pub target: f64,
    pub unit: String,
    pub source: Option<GoalSource>,
    pub project_id: Option<String>,
    pub metric: Option<CareerMetric>,
}

impl NewGoal {
    pub fn into_goal(self, id: String) -> Goal {
        Goal {
            id,
            title: self.title,
            category: self.category,
            progress: self.progress,
            target: self.target,
            unit: self.unit,
            source: self.source,
            project_id: self.project_id,
            metric: self.metric,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub category: Option<GoalCategory>,
    pub progress: Option<f64>,
    pub target: Option<f64>,
    pub unit: Option<String>,
    pub source: Option<Option<GoalSource>>,
    pub project_id: Option<Option<String>>,
    pub metric: Option<Option<CareerMetric>>,
}

impl GoalPatch {
    pub fn apply(&self, goal: &Goal) -> Goal {
        let mut next = goal.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(category) = self.category {
            next.category = category;
        }
        if let Some(progress) = self.progress {
            next.progress = progress;
        }
        if let Some(target) = self.target {
            next.target = target;
        }
        if let Some(unit) = &self.unit {
            next.unit = unit.clone();
        }
        if let Some(source) = self.source {
            next.source = source;
        }
        if let Some(project_id) = &self.project_id {
            next.project_id = project_id.clone();
        }
        if let Some(metric) = self.metric {
            next.metric = metric;
        }
        next
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Projects
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubtask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub subtasks: Vec<ProjectSubtask>,
    pub created_at: String,
}

impl Project {
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    /// Rounded completion percentage; 0 for a project with no subtasks.
    pub fn completion_percent(&self) -> u32 {
        let total = self.subtasks.len();
        if total == 0 {
            return 0;
        }
        (100.0 * self.completed_subtasks() as f64 / total as f64).round() as u32
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Courses
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PrepStatus {
    NotStarted,
    InProgress,
    Ready,
    Done,
}

impl PrepStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, PrepStatus::Ready | PrepStatus::Done)
    }
}

impl FromStr for PrepStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "not-started" => Ok(PrepStatus::NotStarted),
            "in-progress" => Ok(PrepStatus::InProgress),
            "ready" => Ok(PrepStatus::Ready),
            "done" => Ok(PrepStatus::Done),
            other => Err(format!("unknown prep status: {}", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub date: String,
    pub prep_status: PrepStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub studied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Homework {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub exams: Vec<Exam>,
    #[serde(default)]
    pub lectures: Vec<Lecture>,
    #[serde(default)]
    pub homeworks: Vec<Homework>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Career
// ═══════════════════════════════════════════════════════════════════════════════

/// Application pipeline stage. Ordered, but users may move backwards.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Saved,
    Applied,
    Oa,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    /// Whether the application has actually been sent.
    pub fn counts_as_applied(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Applied
                | ApplicationStatus::Oa
                | ApplicationStatus::Interview
                | ApplicationStatus::Offer
        )
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "saved" => Ok(ApplicationStatus::Saved),
            "applied" => Ok(ApplicationStatus::Applied),
            "oa" => Ok(ApplicationStatus::Oa),
            "interview" => Ok(ApplicationStatus::Interview),
            "offer" => Ok(ApplicationStatus::Offer),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(format!("unknown application status: {}", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub company: String,
    pub role: String,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_applied: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Gym
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Push,
    Pull,
    Legs,
    Cardio,
}

impl FromStr for DayType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "push" => Ok(DayType::Push),
            "pull" => Ok(DayType::Pull),
            "legs" => Ok(DayType::Legs),
            "cardio" => Ok(DayType::Cardio),
            other => Err(format!("unknown day type: {}", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GymExercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GymSession {
    pub id: String,
    pub date: String,
    pub day_type: DayType,
    #[serde(default)]
    pub exercises: Vec<GymExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Extracurriculars
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EcTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Extracurricular {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub tasks: Vec<EcTask>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Habits, Dailies
// ═══════════════════════════════════════════════════════════════════════════════

/// A tracked habit. `streak` is a counter maintained by the toggle, not a
/// recomputation from `history`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub history: Vec<String>,
    pub target: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Daily {
    pub id: String,
    pub title: String,
    pub icon: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Schedule, Focus, Inbox
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Class,
    Meeting,
    Focus,
    Personal,
}

/// A weekly calendar block. `day` is a weekday pattern such as `"MWF"` or
/// `"TR"` (R = Thursday).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub kind: EventType,
}

impl CalendarEvent {
    pub fn occurs_on(&self, weekday_code: char) -> bool {
        self.day.contains(weekday_code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub kind: EventType,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub kind: Option<EventType>,
}

impl EventPatch {
    pub fn apply(&self, event: &CalendarEvent) -> CalendarEvent {
        let mut next = event.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(day) = &self.day {
            next.day = day.clone();
        }
        if let Some(start) = &self.start_time {
            next.start_time = start.clone();
        }
        if let Some(end) = &self.end_time {
            next.end_time = end.clone();
        }
        if let Some(kind) = self.kind {
            next.kind = kind;
        }
        next
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Minutes.
    pub duration: u32,
    pub completed_at: String,
    pub category: String,
}

/// Raw inbox entry. Removed once turned into a task.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuickCapture {
    pub id: String,
    pub text: String,
    pub created_at: String,
    #[serde(default)]
    pub processed: bool,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Aggregate Root
// ═══════════════════════════════════════════════════════════════════════════════

/// The whole dashboard. One per running session.
///
/// Every collection sits behind an `Arc` so a transition can hand back a new
/// `AppState` that shares untouched collections with the previous one.
/// `Arc::ptr_eq` on a field tells whether that collection was replaced.
///
/// Keys in the saved document that this version does not know about are kept
/// in `extra` and written back unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub tasks: Arc<Vec<Task>>,
    pub goals: Arc<Vec<Goal>>,
    pub habits: Arc<Vec<Habit>>,
    pub sessions: Arc<Vec<FocusSession>>,
    pub captures: Arc<Vec<QuickCapture>>,
    pub events: Arc<Vec<CalendarEvent>>,
    pub projects: Arc<Vec<Project>>,
    pub courses: Arc<Vec<Course>>,
    pub job_applications: Arc<Vec<JobApplication>>,
    pub gym_sessions: Arc<Vec<GymSession>>,
    pub extracurriculars: Arc<Vec<Extracurricular>>,
    pub dailies: Arc<Vec<Daily>>,
    pub daily_completions: Arc<BTreeMap<String, Vec<String>>>,
    pub strategies: Arc<Vec<String>>,
    #[serde(default)]
    pub motivational_quotes: Arc<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppState {
    /// A state with every collection empty. Mostly useful in tests;
    /// first-run seed data lives in [`crate::defaults`].
    pub fn empty() -> Self {
        Self {
            tasks: Arc::default(),
            goals: Arc::default(),
            habits: Arc::default(),
            sessions: Arc::default(),
            captures: Arc::default(),
            events: Arc::default(),
            projects: Arc::default(),
            courses: Arc::default(),
            job_applications: Arc::default(),
            gym_sessions: Arc::default(),
            extracurriculars: Arc::default(),
            dailies: Arc::default(),
            daily_completions: Arc::default(),
            strategies: Arc::default(),
            motivational_quotes: Arc::default(),
            extra: Map::new(),
        }
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Ids of dailies completed on `date` (empty if none).
    pub fn dailies_done_on(&self, date: &str) -> &[String] {
        self.daily_completions
            .get(date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with(done: usize, total: usize) -> Project {
        Project {
            id: "p".to_string(),
            name: "P".to_string(),
            description: None,
            goal_id: None,
            subtasks: (0..total)
                .map(|i| ProjectSubtask {
                    id: format!("s{}", i),
                    title: format!("Step {}", i),
                    completed: i < done,
                    due: None,
                })
                .collect(),
            created_at: "2026-01-01".to_string(),
        }
    }

    #[test]
    fn test_completion_percent_rounds() {
        assert_eq!(project_with(1, 4).completion_percent(), 25);
        assert_eq!(project_with(1, 3).completion_percent(), 33);
        assert_eq!(project_with(2, 3).completion_percent(), 67);
        assert_eq!(project_with(1, 8).completion_percent(), 13);
    }

    #[test]
    fn test_completion_percent_empty_project_is_zero() {
        assert_eq!(project_with(0, 0).completion_percent(), 0);
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let mut task = NewTask::new("Write report", TaskCategory::Project).into_task("t1".into());
        task.project_id = Some("p1".to_string());
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["projectId"], "p1");
        assert_eq!(json["category"], "project");
        assert!(json.get("due").is_none());
    }

    #[test]
    fn test_event_type_field_is_named_type() {
        let json = r#"{"id":"e","title":"Lab","day":"T","startTime":"14:30","endTime":"17:20","type":"class"}"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventType::Class);
        assert!(event.occurs_on('T'));
        assert!(!event.occurs_on('R'));
    }

    #[test]
    fn test_recurrence_none_round_trips() {
        let value = serde_json::to_value(Recurrence::Never).unwrap();
        assert_eq!(value, "none");
        let parsed: Recurrence = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, Recurrence::Never);
    }

    #[test]
    fn test_application_status_applied_set() {
        assert!(!ApplicationStatus::Saved.counts_as_applied());
        assert!(ApplicationStatus::Oa.counts_as_applied());
        assert!(ApplicationStatus::Offer.counts_as_applied());
        assert!(!ApplicationStatus::Rejected.counts_as_applied());
    }

    #[test]
    fn test_task_patch_clears_optional_field() {
        let mut task = NewTask::new("x", TaskCategory::Personal).into_task("t".into());
        task.due = Some("2026-03-01".to_string());
        let patch = TaskPatch {
            due: Some(None),
            priority: Some(Priority::High),
            ..TaskPatch::default()
        };
        let next = patch.apply(&task);
        assert_eq!(next.due, None);
        assert_eq!(next.priority, Priority::High);
        assert_eq!(next.title, "x");
    }

    #[test]
    fn test_goal_accepts_integer_progress() {
        let json = r#"{"id":"g","title":"Gym","category":"gym","progress":3,"target":50,"unit":"sessions"}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.progress, 3.0);
        assert_eq!(goal.source, None);
    }
}
