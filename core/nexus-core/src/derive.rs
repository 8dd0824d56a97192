//! Goal progress derivation.
//!
//! Source-tagged goals are kept in step with the collection they track. Each
//! rule is a pure function `(goals, source collection) -> goals` and runs only
//! when its source collection is bulk-replaced:
//!
//! ```text
//! set_projects         → project goals:  progress = % subtasks done, target = 100
//! set_job_applications → career goals:   progress = applied | offers
//! set_gym_sessions     → gym goals:      progress = number of sessions
//! ```
//!
//! A goal no rule applies to passes through untouched. A goal pointing at a
//! project that no longer exists is also left as is.

use crate::types::{
    ApplicationStatus, CareerMetric, Goal, GoalCategory, GoalSource, GymSession, JobApplication,
    Project,
};

/// Application counters shared by all career goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CareerCounts {
    /// Applications in applied, oa, interview or offer.
    pub applied: usize,
    pub offers: usize,
}

impl CareerCounts {
    pub fn from_applications(applications: &[JobApplication]) -> Self {
        applications
            .iter()
            .fold(CareerCounts::default(), |mut counts, app| {
                if app.status.counts_as_applied() {
                    counts.applied += 1;
                }
                if app.status == ApplicationStatus::Offer {
                    counts.offers += 1;
                }
                counts
            })
    }

    pub fn get(&self, metric: CareerMetric) -> usize {
        match metric {
            CareerMetric::ApplicationsSent => self.applied,
            CareerMetric::OffersReceived => self.offers,
        }
    }
}

/// Which counter a career goal follows.
///
/// An explicit `metric` wins. Without one the title decides: "Applications"
/// binds to sends, "Internship" or "offer" to offers. Case-sensitive, checked
/// in that order.
pub fn career_metric(goal: &Goal) -> Option<CareerMetric> {
    if let Some(metric) = goal.metric {
        return Some(metric);
    }
    if goal.title.contains("Applications") {
        Some(CareerMetric::ApplicationsSent)
    } else if goal.title.contains("Internship") || goal.title.contains("offer") {
        Some(CareerMetric::OffersReceived)
    } else {
        None
    }
}

pub fn derive_project_goals(goals: &[Goal], projects: &[Project]) -> Vec<Goal> {
    goals
        .iter()
        .map(|goal| {
            if goal.source != Some(GoalSource::Project) {
                return goal.clone();
            }
            let project = goal
                .project_id
                .as_deref()
                .and_then(|id| projects.iter().find(|p| p.id == id));
            match project {
                Some(project) => Goal {
                    progress: f64::from(project.completion_percent()),
                    target: 100.0,
                    ..goal.clone()
                },
                None => goal.clone(),
            }
        })
        .collect()
}

pub fn derive_career_goals(goals: &[Goal], applications: &[JobApplication]) -> Vec<Goal> {
    let counts = CareerCounts::from_applications(applications);
    goals
        .iter()
        .map(|goal| {
            if goal.source != Some(GoalSource::Career) {
                return goal.clone();
            }
            match career_metric(goal) {
                Some(metric) => Goal {
                    progress: counts.get(metric) as f64,
                    ..goal.clone()
                },
                None => goal.clone(),
            }
        })
        .collect()
}

/// Every gym-category goal counts sessions, whatever its `source`.
pub fn derive_gym_goals(goals: &[Goal], sessions: &[GymSession]) -> Vec<Goal> {
    let logged = sessions.len() as f64;
    goals
        .iter()
        .map(|goal| {
            if goal.category == GoalCategory::Gym {
                Goal {
                    progress: logged,
                    ..goal.clone()
                }
            } else {
                goal.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DayType, ProjectSubtask};

    fn goal(id: &str, title: &str, category: GoalCategory, source: Option<GoalSource>) -> Goal {
        Goal {
            id: id.into(),
            title: title.into(),
            category,
            progress: 7.0,
            target: 10.0,
            unit: "x".into(),
            source,
            project_id: None,
            metric: None,
        }
    }

    fn project(id: &str, done: usize, total: usize) -> Project {
        Project {
            id: id.into(),
            name: id.into(),
            description: None,
            goal_id: None,
            subtasks: (0..total)
                .map(|i| ProjectSubtask {
                    id: format!("{}-{}", id, i),
                    title: "step".into(),
                    completed: i < done,
                    due: None,
                })
                .collect(),
            created_at: "2026-01-01".into(),
        }
    }

    fn app(status: ApplicationStatus) -> JobApplication {
        JobApplication {
            id: "a".into(),
            company: "Acme".into(),
            role: "Intern".into(),
            status,
            date_applied: None,
            notes: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Project Rule
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_project_goal_tracks_subtask_ratio() {
        let mut g = goal("g", "Ship it", GoalCategory::Project, Some(GoalSource::Project));
        g.project_id = Some("p1".into());

        let derived = derive_project_goals(&[g], &[project("p1", 1, 4)]);

        assert_eq!(derived[0].progress, 25.0);
        assert_eq!(derived[0].target, 100.0);
    }

    #[test]
    fn test_project_goal_with_no_subtasks_is_zero() {
        let mut g = goal("g", "Ship it", GoalCategory::Project, Some(GoalSource::Project));
        g.project_id = Some("p1".into());

        let derived = derive_project_goals(&[g], &[project("p1", 0, 0)]);

        assert_eq!(derived[0].progress, 0.0);
        assert_eq!(derived[0].target, 100.0);
    }

    #[test]
    fn test_project_goal_with_missing_project_is_untouched() {
        let mut g = goal("g", "Ship it", GoalCategory::Project, Some(GoalSource::Project));
        g.project_id = Some("deleted".into());

        let derived = derive_project_goals(&[g.clone()], &[project("p1", 2, 2)]);

        assert_eq!(derived[0], g);
    }

    #[test]
    fn test_project_goal_without_project_id_is_untouched() {
        let g = goal("g", "Ship it", GoalCategory::Project, Some(GoalSource::Project));
        let derived = derive_project_goals(&[g.clone()], &[project("p1", 2, 2)]);
        assert_eq!(derived[0], g);
    }

    #[test]
    fn test_manual_goal_ignores_projects() {
        let mut g = goal("g", "Ship it", GoalCategory::Project, Some(GoalSource::Manual));
        g.project_id = Some("p1".into());

        let derived = derive_project_goals(&[g.clone()], &[project("p1", 2, 2)]);

        assert_eq!(derived[0], g);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Career Rule
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_career_counts() {
        let apps = [
            app(ApplicationStatus::Saved),
            app(ApplicationStatus::Applied),
            app(ApplicationStatus::Oa),
            app(ApplicationStatus::Interview),
            app(ApplicationStatus::Offer),
            app(ApplicationStatus::Rejected),
        ];
        let counts = CareerCounts::from_applications(&apps);
        assert_eq!(counts.applied, 4);
        assert_eq!(counts.offers, 1);
    }

    #[test]
    fn test_offers_never_exceed_applied() {
        let statuses = [
            ApplicationStatus::Saved,
            ApplicationStatus::Applied,
            ApplicationStatus::Oa,
            ApplicationStatus::Interview,
            ApplicationStatus::Offer,
            ApplicationStatus::Rejected,
        ];
        // Every list of up to three applications.
        for a in statuses {
            for b in statuses {
                for c in statuses {
                    let apps = [app(a), app(b), app(c)];
                    let counts = CareerCounts::from_applications(&apps);
                    assert!(counts.applied <= apps.len());
                    assert!(counts.offers <= counts.applied);
                }
            }
        }
    }

    #[test]
    fn test_career_goals_bind_by_title() {
        let goals = [
            goal("g1", "Land Summer Internship", GoalCategory::Career, Some(GoalSource::Career)),
            goal("g2", "Applications Sent", GoalCategory::Career, Some(GoalSource::Career)),
            goal("g3", "Get an offer", GoalCategory::Career, Some(GoalSource::Career)),
            goal("g4", "Network more", GoalCategory::Career, Some(GoalSource::Career)),
        ];
        let apps = [
            app(ApplicationStatus::Applied),
            app(ApplicationStatus::Offer),
            app(ApplicationStatus::Saved),
        ];

        let derived = derive_career_goals(&goals, &apps);

        assert_eq!(derived[0].progress, 1.0);
        assert_eq!(derived[1].progress, 2.0);
        assert_eq!(derived[2].progress, 1.0);
        assert_eq!(derived[3], goals[3]);
    }

    #[test]
    fn test_applications_title_wins_over_internship() {
        let g = goal(
            "g",
            "Internship Applications",
            GoalCategory::Career,
            Some(GoalSource::Career),
        );
        assert_eq!(career_metric(&g), Some(CareerMetric::ApplicationsSent));
    }

    #[test]
    fn test_explicit_metric_overrides_title() {
        let mut g = goal("g", "Applications Sent", GoalCategory::Career, Some(GoalSource::Career));
        g.metric = Some(CareerMetric::OffersReceived);

        let derived = derive_career_goals(&[g], &[app(ApplicationStatus::Applied)]);

        assert_eq!(derived[0].progress, 0.0);
    }

    #[test]
    fn test_career_rule_skips_untagged_goals() {
        let g = goal("g", "Applications Sent", GoalCategory::Career, None);
        let derived = derive_career_goals(&[g.clone()], &[app(ApplicationStatus::Applied)]);
        assert_eq!(derived[0], g);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Gym Rule
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_gym_goals_count_sessions_regardless_of_source() {
        let goals = [
            goal("g1", "Gym", GoalCategory::Gym, Some(GoalSource::Manual)),
            goal("g2", "Lift", GoalCategory::Gym, None),
            goal("g3", "Read", GoalCategory::Personal, None),
        ];
        let sessions: Vec<GymSession> = (0..3)
            .map(|i| GymSession {
                id: format!("s{}", i),
                date: "2026-01-01".into(),
                day_type: DayType::Push,
                exercises: Vec::new(),
                duration: None,
            })
            .collect();

        let derived = derive_gym_goals(&goals, &sessions);

        assert_eq!(derived[0].progress, 3.0);
        assert_eq!(derived[1].progress, 3.0);
        assert_eq!(derived[2], goals[2]);
    }
}
