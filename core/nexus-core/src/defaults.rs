//! First-run seed data.
//!
//! This is also the migration template: on load, every collection present in
//! the saved document replaces the matching field here wholesale.

use crate::ids::today;
use crate::types::*;
use serde_json::Map;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const DEFAULT_QUOTES: [&str; 5] = [
    "The best time to start was yesterday. The next best time is now.",
    "Small steps lead to big changes.",
    "Focus on progress, not perfection.",
    "Discipline is choosing what you want most over what you want now.",
    "Done is better than perfect.",
];

const DEFAULT_STRATEGIES: [&str; 5] = [
    "Use morning energy (7-9AM) for hardest tasks before classes",
    "Time-block TR free periods for deep work on projects",
    "Batch similar tasks: all homework in one session",
    "2-minute rule: if it takes <2 min, do it now",
    "Plan tomorrow's top 3 priorities before bed",
];

/// Seed state dated today.
pub fn default_state() -> AppState {
    default_state_for(&today())
}

/// Seed state with every date field set to `date`.
pub fn default_state_for(date: &str) -> AppState {
    AppState {
        tasks: Arc::default(),
        goals: Arc::new(seed_goals()),
        habits: Arc::new(vec![
            habit("h1", "Wake up by 7AM", "🌅"),
            habit("h2", "Study Block", "📚"),
            habit("h3", "No Phone First Hour", "📵"),
        ]),
        sessions: Arc::default(),
        captures: Arc::default(),
        events: Arc::new(seed_events()),
        projects: Arc::new(seed_projects(date)),
        courses: Arc::new(seed_courses(date)),
        job_applications: Arc::new(vec![
            application("j1", "Tesla", "ME Intern", ApplicationStatus::Applied, Some(date)),
            application("j2", "Rivian", "ME Intern", ApplicationStatus::Saved, None),
            application("j3", "Cummins", "Intern", ApplicationStatus::Applied, None),
        ]),
        gym_sessions: Arc::default(),
        extracurriculars: Arc::new(seed_extracurriculars()),
        dailies: Arc::new(vec![
            daily("d1", "Review today's schedule", "📋"),
            daily("d2", "Check deadlines", "⏰"),
            daily("d3", "1 pomodoro on top task", "🍅"),
            daily("d4", "Update job applications", "💼"),
            daily("d5", "Evening review", "📝"),
        ]),
        daily_completions: Arc::new(BTreeMap::new()),
        strategies: Arc::new(DEFAULT_STRATEGIES.iter().map(|s| s.to_string()).collect()),
        motivational_quotes: Arc::new(DEFAULT_QUOTES.iter().map(|s| s.to_string()).collect()),
        extra: Map::new(),
    }
}

fn seed_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "g1".into(),
            title: "Land Summer Internship".into(),
            category: GoalCategory::Career,
            progress: 0.0,
            target: 5.0,
            unit: "offers".into(),
            source: Some(GoalSource::Career),
            project_id: None,
            metric: Some(CareerMetric::OffersReceived),
        },
        Goal {
            id: "g2".into(),
            title: "Complete Vibration Isolation Project".into(),
            category: GoalCategory::Project,
            progress: 0.0,
            target: 100.0,
            unit: "%".into(),
            source: Some(GoalSource::Project),
            project_id: Some("p1".into()),
            metric: None,
        },
        Goal {
            id: "g3".into(),
            title: "Applications Sent".into(),
            category: GoalCategory::Career,
            progress: 0.0,
            target: 100.0,
            unit: "apps".into(),
            source: Some(GoalSource::Career),
            project_id: None,
            metric: Some(CareerMetric::ApplicationsSent),
        },
        Goal {
            id: "g4".into(),
            title: "Gym This Semester".into(),
            category: GoalCategory::Gym,
            progress: 0.0,
            target: 50.0,
            unit: "sessions".into(),
            source: Some(GoalSource::Manual),
            project_id: None,
            metric: None,
        },
    ]
}

fn seed_projects(date: &str) -> Vec<Project> {
    vec![
        Project {
            id: "p1".into(),
            name: "Vibration Isolation Module".into(),
            description: Some("Project with skills to stand out".into()),
            goal_id: Some("g2".into()),
            subtasks: vec![
                subtask("ps1", "Research & spec", true),
                subtask("ps2", "CAD design", false),
                subtask("ps3", "Prototype", false),
                subtask("ps4", "Testing & iteration", false),
            ],
            created_at: date.into(),
        },
        Project {
            id: "p2".into(),
            name: "Productivity Device".into(),
            description: Some("Side quest project".into()),
            goal_id: None,
            subtasks: vec![
                subtask("ps5", "Define concept", false),
                subtask("ps6", "Build MVP", false),
            ],
            created_at: date.into(),
        },
    ]
}

fn seed_courses(date: &str) -> Vec<Course> {
    vec![
        Course {
            id: "c1".into(),
            code: "MA 30300".into(),
            name: "Differential Equations".into(),
            exams: vec![Exam {
                id: "e1".into(),
                title: "Midterm".into(),
                date: date.into(),
                prep_status: PrepStatus::NotStarted,
            }],
            lectures: vec![
                lecture("l1", "Lec 1-3: Intro", true),
                lecture("l2", "Lec 4-6: ODEs", false),
            ],
            homeworks: vec![homework("hw1", "HW 3", date)],
        },
        course("c2", "ME 30800", "Fluid Mechanics", vec![homework("hw2", "Problem Set 2", date)]),
        course("c3", "ME 36500", "Systems & Control", vec![homework("hw3", "Lab Report", date)]),
        course("c4", "ME 32300", "Mechanics of Materials", Vec::new()),
        course("c5", "GER 10200", "German II", Vec::new()),
    ]
}

fn seed_events() -> Vec<CalendarEvent> {
    use EventType::{Class, Meeting};
    vec![
        event("ev1", "MA 30300", "MWF", "08:30", "09:20", Class),
        event("ev2", "ME 36500 Lec", "MW", "09:30", "10:20", Class),
        event("ev3", "GER 10200", "MWF", "11:30", "12:20", Class),
        event("ev4", "ME 30800", "MWF", "12:30", "13:20", Class),
        event("ev5", "ME 32300", "MWF", "13:30", "14:20", Class),
        event("ev6", "ME 36500 Lab", "T", "14:30", "17:20", Class),
        event("ev7", "ME 32301 Lab", "R", "13:30", "17:20", Class),
        event("ev8", "ASME Racing", "R", "18:30", "20:30", Meeting),
        event("ev9", "PASE Meeting", "W", "19:00", "20:00", Meeting),
    ]
}

fn seed_extracurriculars() -> Vec<Extracurricular> {
    vec![
        Extracurricular {
            id: "ec1".into(),
            name: "ASME Racing".into(),
            role: Some("Powertrains".into()),
            tasks: vec![
                ec_task("ect1", "CVT Mount Design Review"),
                ec_task("ect2", "Exhaust mount"),
            ],
        },
        Extracurricular {
            id: "ec2".into(),
            name: "PASE".into(),
            role: Some("Board - PD Committee".into()),
            tasks: vec![ec_task("ect3", "Mock Career Fair prep")],
        },
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────────────

fn habit(id: &str, name: &str, icon: &str) -> Habit {
    Habit {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
        streak: 0,
        history: Vec::new(),
        target: 7,
    }
}

fn daily(id: &str, title: &str, icon: &str) -> Daily {
    Daily {
        id: id.into(),
        title: title.into(),
        icon: icon.into(),
    }
}

fn subtask(id: &str, title: &str, completed: bool) -> ProjectSubtask {
    ProjectSubtask {
        id: id.into(),
        title: title.into(),
        completed,
        due: None,
    }
}

fn lecture(id: &str, title: &str, studied: bool) -> Lecture {
    Lecture {
        id: id.into(),
        title: title.into(),
        studied,
        notes: None,
    }
}

fn homework(id: &str, title: &str, due: &str) -> Homework {
    Homework {
        id: id.into(),
        title: title.into(),
        due: Some(due.into()),
        completed: false,
    }
}

fn course(id: &str, code: &str, name: &str, homeworks: Vec<Homework>) -> Course {
    Course {
        id: id.into(),
        code: code.into(),
        name: name.into(),
        exams: Vec::new(),
        lectures: Vec::new(),
        homeworks,
    }
}

fn application(
    id: &str,
    company: &str,
    role: &str,
    status: ApplicationStatus,
    date_applied: Option<&str>,
) -> JobApplication {
    JobApplication {
        id: id.into(),
        company: company.into(),
        role: role.into(),
        status,
        date_applied: date_applied.map(String::from),
        notes: None,
    }
}

fn event(id: &str, title: &str, day: &str, start: &str, end: &str, kind: EventType) -> CalendarEvent {
    CalendarEvent {
        id: id.into(),
        title: title.into(),
        day: day.into(),
        start_time: start.into(),
        end_time: end.into(),
        kind,
    }
}

fn ec_task(id: &str, title: &str) -> EcTask {
    EcTask {
        id: id.into(),
        title: title.into(),
        completed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_follow_argument() {
        let state = default_state_for("2026-09-01");
        assert!(state.projects.iter().all(|p| p.created_at == "2026-09-01"));
        assert_eq!(state.courses[0].exams[0].date, "2026-09-01");
    }

    #[test]
    fn test_seed_project_goal_links_resolve() {
        let state = default_state_for("2026-09-01");
        let goal = state.goal("g2").unwrap();
        let project = state.project(goal.project_id.as_deref().unwrap()).unwrap();
        assert_eq!(project.goal_id.as_deref(), Some("g2"));
    }

    #[test]
    fn test_seed_starts_with_empty_inbox_and_tasks() {
        let state = default_state_for("2026-09-01");
        assert!(state.tasks.is_empty());
        assert!(state.captures.is_empty());
        assert_eq!(state.motivational_quotes.len(), DEFAULT_QUOTES.len());
    }
}
