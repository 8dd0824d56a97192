//! NexusEngine - the single entry point for Nexus clients.
//!
//! The engine owns the current [`AppState`], the focus timer and the storage
//! location. Every mutating call replaces the state with the result of a
//! transition from [`crate::mutations`] and immediately writes the whole state
//! to disk. A failed write is logged and otherwise ignored: the in-memory
//! state stays authoritative for the rest of the session.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use nexus_core::{NexusEngine, NewTask, TaskCategory};
//!
//! let mut engine = NexusEngine::new()?;
//! let id = engine.add_task(NewTask::new("Lab report", TaskCategory::Course));
//! engine.complete_task(&id, true);
//! ```

use crate::capture::{task_from_capture, CaptureContext};
use crate::config::{load_config, save_config, NexusConfig};
use crate::error::Result;
use crate::ids::{gen_id, now_timestamp, today};
use crate::storage::StorageConfig;
use crate::store::{load_state, save_state};
use crate::timer::{FocusTimer, Notifier, SilentNotifier, FOCUS_MINUTES};
use crate::types::*;

const HABIT_TARGET: u32 = 7;

pub struct NexusEngine {
    storage: StorageConfig,
    config: NexusConfig,
    state: AppState,
    timer: FocusTimer,
    notifier: Box<dyn Notifier>,
}

impl NexusEngine {
    /// Opens the engine on the default storage root (`~/.nexus`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_storage(StorageConfig::new()?))
    }

    /// Opens the engine on a custom storage root. Used by tests.
    pub fn with_storage(storage: StorageConfig) -> Self {
        let state = load_state(&storage);
        let config = load_config(&storage);
        tracing::debug!(
            root = %storage.root().display(),
            count = state.tasks.len(),
            "Loaded state"
        );
        Self {
            storage,
            config,
            state,
            timer: FocusTimer::new(),
            notifier: Box::new(SilentNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn config(&self) -> &NexusConfig {
        &self.config
    }

    pub fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    /// Replaces and saves the configuration.
    pub fn set_config(&mut self, config: NexusConfig) -> Result<()> {
        save_config(&self.storage, &config)?;
        self.config = config;
        Ok(())
    }

    fn commit(&mut self, next: AppState) {
        self.state = next;
        if let Err(err) = save_state(&self.storage, &self.state) {
            tracing::warn!(
                error = %err,
                path = %self.storage.state_file().display(),
                "Failed to save state, keeping in-memory copy"
            );
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Tasks
    // ─────────────────────────────────────────────────────────────────────────────

    /// Adds a task and returns its id.
    pub fn add_task(&mut self, draft: NewTask) -> String {
        let id = gen_id();
        let next = self.state.add_task(draft.into_task(id.clone()));
        self.commit(next);
        id
    }

    pub fn update_task(&mut self, id: &str, patch: &TaskPatch) {
        let next = self.state.update_task(id, patch);
        self.commit(next);
    }

    pub fn complete_task(&mut self, id: &str, done: bool) {
        self.update_task(id, &TaskPatch::completed(done));
    }

    pub fn delete_task(&mut self, id: &str) {
        let next = self.state.delete_task(id);
        self.commit(next);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Goals
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_goal(&mut self, draft: NewGoal) -> String {
        let id = gen_id();
        let next = self.state.add_goal(draft.into_goal(id.clone()));
        self.commit(next);
        id
    }

    pub fn update_goal(&mut self, id: &str, patch: &GoalPatch) {
        let next = self.state.update_goal(id, patch);
        self.commit(next);
    }

    pub fn delete_goal(&mut self, id: &str) {
        let next = self.state.delete_goal(id);
        self.commit(next);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Habits & Dailies
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_habit(&mut self, name: &str, icon: &str) -> String {
        let id = gen_id();
        let habit = Habit {
            id: id.clone(),
            name: name.to_string(),
            icon: icon.to_string(),
            streak: 0,
            history: Vec::new(),
            target: HABIT_TARGET,
        };
        let next = self.state.add_habit(habit);
        self.commit(next);
        id
    }

    /// Toggles today's completion for a habit.
    pub fn toggle_habit(&mut self, id: &str) {
        let next = self.state.toggle_habit(id, &today());
        self.commit(next);
    }

    pub fn delete_habit(&mut self, id: &str) {
        let next = self.state.delete_habit(id);
        self.commit(next);
    }

    /// Toggles today's completion for a daily prompt.
    pub fn toggle_daily(&mut self, id: &str) {
        let next = self.state.toggle_daily(id, &today());
        self.commit(next);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Calendar Events
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_event(&mut self, draft: NewEvent) -> String {
        let id = gen_id();
        let event = CalendarEvent {
            id: id.clone(),
            title: draft.title,
            day: draft.day,
            start_time: draft.start_time,
            end_time: draft.end_time,
            kind: draft.kind,
        };
        let next = self.state.add_event(event);
        self.commit(next);
        id
    }

    pub fn update_event(&mut self, id: &str, patch: &EventPatch) {
        let next = self.state.update_event(id, patch);
        self.commit(next);
    }

    pub fn delete_event(&mut self, id: &str) {
        let next = self.state.delete_event(id);
        self.commit(next);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Strategies
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_strategy(&mut self, text: &str) {
        let next = self.state.add_strategy(text.to_string());
        self.commit(next);
    }

    pub fn update_strategy(&mut self, index: usize, text: &str) {
        let next = self.state.update_strategy(index, text);
        self.commit(next);
    }

    pub fn delete_strategy(&mut self, index: usize) {
        let next = self.state.delete_strategy(index);
        self.commit(next);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Inbox
    // ─────────────────────────────────────────────────────────────────────────────

    /// Adds an inbox entry. Blank text is ignored and returns `None`.
    pub fn add_capture(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = gen_id();
        let capture = QuickCapture {
            id: id.clone(),
            text: text.to_string(),
            created_at: now_timestamp(),
            processed: false,
        };
        let next = self.state.add_capture(capture);
        self.commit(next);
        Some(id)
    }

    pub fn delete_capture(&mut self, id: &str) {
        let next = self.state.delete_capture(id);
        self.commit(next);
    }

    /// Classifies an inbox entry into a task and removes the entry.
    /// Returns the new task's id, or `None` for an unknown capture.
    pub fn process_capture(&mut self, id: &str) -> Option<String> {
        let capture = self.state.captures.iter().find(|c| c.id == id)?.clone();
        let ctx = CaptureContext::from_state(&self.state);
        let task_id = gen_id();
        let task = task_from_capture(&capture, &ctx).into_task(task_id.clone());
        tracing::debug!(capture = %id, category = %task.category, "Processed capture");
        let next = self.state.convert_capture(id, task);
        self.commit(next);
        Some(task_id)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Bulk Setters
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        let next = self.state.set_projects(projects);
        self.commit(next);
    }

    pub fn set_job_applications(&mut self, applications: Vec<JobApplication>) {
        let next = self.state.set_job_applications(applications);
        self.commit(next);
    }

    pub fn set_gym_sessions(&mut self, sessions: Vec<GymSession>) {
        let next = self.state.set_gym_sessions(sessions);
        self.commit(next);
    }

    pub fn set_courses(&mut self, courses: Vec<Course>) {
        let next = self.state.set_courses(courses);
        self.commit(next);
    }

    pub fn set_extracurriculars(&mut self, extracurriculars: Vec<Extracurricular>) {
        let next = self.state.set_extracurriculars(extracurriculars);
        self.commit(next);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Projects
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_project(&mut self, name: &str, description: Option<&str>) -> String {
        let id = gen_id();
        let mut projects = self.state.projects.to_vec();
        projects.push(Project {
            id: id.clone(),
            name: name.to_string(),
            description: description.map(String::from),
            goal_id: None,
            subtasks: Vec::new(),
            created_at: today(),
        });
        self.set_projects(projects);
        id
    }

    pub fn toggle_subtask(&mut self, project_id: &str, subtask_id: &str) {
        let projects = self
            .state
            .projects
            .iter()
            .map(|p| {
                if p.id != project_id {
                    return p.clone();
                }
                let mut project = p.clone();
                for subtask in project.subtasks.iter_mut().filter(|s| s.id == subtask_id) {
                    subtask.completed = !subtask.completed;
                }
                project
            })
            .collect();
        self.set_projects(projects);
    }

    /// Appends a subtask. `None` if the project does not exist.
    pub fn add_subtask(&mut self, project_id: &str, title: &str) -> Option<String> {
        self.state.project(project_id)?;
        let id = gen_id();
        let projects = self
            .state
            .projects
            .iter()
            .map(|p| {
                let mut project = p.clone();
                if p.id == project_id {
                    project.subtasks.push(ProjectSubtask {
                        id: id.clone(),
                        title: title.to_string(),
                        completed: false,
                        due: None,
                    });
                }
                project
            })
            .collect();
        self.set_projects(projects);
        Some(id)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Career
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn add_application(&mut self, company: &str, role: &str, status: ApplicationStatus) -> String {
        let id = gen_id();
        let mut applications = self.state.job_applications.to_vec();
        applications.push(JobApplication {
            id: id.clone(),
            company: company.to_string(),
            role: role.to_string(),
            status,
            date_applied: status.counts_as_applied().then(today),
            notes: None,
        });
        self.set_job_applications(applications);
        id
    }

    /// Moves an application to a new stage. Stamps today's date the first
    /// time it counts as applied.
    pub fn set_application_status(&mut self, id: &str, status: ApplicationStatus) {
        let applications = self
            .state
            .job_applications
            .iter()
            .map(|a| {
                if a.id != id {
                    return a.clone();
                }
                let date_applied = match &a.date_applied {
                    Some(date) => Some(date.clone()),
                    None => status.counts_as_applied().then(today),
                };
                JobApplication {
                    status,
                    date_applied,
                    ..a.clone()
                }
            })
            .collect();
        self.set_job_applications(applications);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Gym
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn log_gym_session(
        &mut self,
        day_type: DayType,
        exercises: Vec<GymExercise>,
        duration: Option<u32>,
    ) -> String {
        let id = gen_id();
        let mut sessions = self.state.gym_sessions.to_vec();
        sessions.push(GymSession {
            id: id.clone(),
            date: today(),
            day_type,
            exercises,
            duration,
        });
        self.set_gym_sessions(sessions);
        id
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Courses
    // ─────────────────────────────────────────────────────────────────────────────

    fn update_course(&mut self, course_id: &str, change: impl Fn(&mut Course)) {
        let courses = self
            .state
            .courses
            .iter()
            .map(|c| {
                let mut course = c.clone();
                if c.id == course_id {
                    change(&mut course);
                }
                course
            })
            .collect();
        self.set_courses(courses);
    }

    pub fn toggle_homework(&mut self, course_id: &str, homework_id: &str) {
        self.update_course(course_id, |course| {
            for hw in course.homeworks.iter_mut().filter(|h| h.id == homework_id) {
                hw.completed = !hw.completed;
            }
        });
    }

    pub fn toggle_lecture(&mut self, course_id: &str, lecture_id: &str) {
        self.update_course(course_id, |course| {
            for lecture in course.lectures.iter_mut().filter(|l| l.id == lecture_id) {
                lecture.studied = !lecture.studied;
            }
        });
    }

    pub fn set_exam_prep(&mut self, course_id: &str, exam_id: &str, status: PrepStatus) {
        self.update_course(course_id, |course| {
            for exam in course.exams.iter_mut().filter(|e| e.id == exam_id) {
                exam.prep_status = status;
            }
        });
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Extracurriculars
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn toggle_ec_task(&mut self, ec_id: &str, task_id: &str) {
        let extracurriculars = self
            .state
            .extracurriculars
            .iter()
            .map(|ec| {
                let mut next = ec.clone();
                if ec.id == ec_id {
                    for task in next.tasks.iter_mut().filter(|t| t.id == task_id) {
                        task.completed = !task.completed;
                    }
                }
                next
            })
            .collect();
        self.set_extracurriculars(extracurriculars);
    }

    /// Appends a task to an extracurricular. `None` if it does not exist.
    pub fn add_ec_task(&mut self, ec_id: &str, title: &str) -> Option<String> {
        if !self.state.extracurriculars.iter().any(|ec| ec.id == ec_id) {
            return None;
        }
        let id = gen_id();
        let extracurriculars = self
            .state
            .extracurriculars
            .iter()
            .map(|ec| {
                let mut next = ec.clone();
                if ec.id == ec_id {
                    next.tasks.push(EcTask {
                        id: id.clone(),
                        title: title.to_string(),
                        completed: false,
                    });
                }
                next
            })
            .collect();
        self.set_extracurriculars(extracurriculars);
        Some(id)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Focus Timer
    // ─────────────────────────────────────────────────────────────────────────────

    /// Starts a focus block. Returns false if one is already running or paused.
    pub fn start_timer(&mut self, task_id: Option<String>) -> bool {
        self.timer.start(task_id)
    }

    pub fn toggle_pause(&mut self) {
        self.timer.toggle_pause();
    }

    /// Abandons the current block without recording a session.
    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    pub fn link_timer_task(&mut self, task_id: Option<String>) {
        self.timer.link_task(task_id);
    }

    /// Advances the timer by one second. On natural completion records the
    /// session, credits the linked task and sends a notification.
    pub fn tick_timer(&mut self) -> Option<FocusSession> {
        let completion = self.timer.tick()?;
        let session = FocusSession {
            id: gen_id(),
            category: self.state.focus_category(completion.task_id.as_deref()),
            task_id: completion.task_id,
            duration: FOCUS_MINUTES,
            completed_at: now_timestamp(),
        };
        tracing::info!(category = %session.category, "Focus session complete");

        let next = self.state.record_focus_session(session.clone());
        self.commit(next);

        if self.config.notifications {
            if let Err(err) = self
                .notifier
                .notify("🍅 Pomodoro Complete!", "Great work! Take a 5-minute break.")
            {
                tracing::debug!(error = %err, "Notification failed");
            }
        }
        Some(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::FOCUS_SECONDS;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn engine_in(dir: &std::path::Path) -> NexusEngine {
        NexusEngine::with_storage(StorageConfig::with_root(dir.to_path_buf()))
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        sent: Rc<RefCell<Vec<String>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, _body: &str) -> std::result::Result<(), String> {
            self.sent.borrow_mut().push(title.to_string());
            Ok(())
        }
    }

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&self, _title: &str, _body: &str) -> std::result::Result<(), String> {
            Err("permission denied".to_string())
        }
    }

    #[test]
    fn test_fresh_engine_starts_from_seed_state() {
        let temp = tempdir().unwrap();
        let engine = engine_in(temp.path());
        assert_eq!(engine.state().goals.len(), 4);
        assert!(engine.state().tasks.is_empty());
        assert!(engine.config().notifications);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());

        let id = engine.add_task(NewTask::new("Write memo", TaskCategory::Career));
        engine.complete_task(&id, true);

        let reloaded = engine_in(temp.path());
        let task = reloaded.state().task(&id).unwrap();
        assert_eq!(task.title, "Write memo");
        assert!(task.completed);
    }

    #[test]
    fn test_blank_capture_is_ignored() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());
        let before = engine.state().captures.len();

        assert_eq!(engine.add_capture("   "), None);
        assert_eq!(engine.state().captures.len(), before);
    }

    #[test]
    fn test_process_capture_files_classified_task() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());

        let capture_id = engine.add_capture("  update resume ASAP ").unwrap();
        let task_id = engine.process_capture(&capture_id).unwrap();

        let task = engine.state().task(&task_id).unwrap();
        assert_eq!(task.title, "update resume ASAP");
        assert_eq!(task.category, TaskCategory::Career);
        assert_eq!(task.priority, Priority::High);
        assert!(engine.state().captures.iter().all(|c| c.id != capture_id));
        assert_eq!(engine.process_capture(&capture_id), None);
    }

    #[test]
    fn test_toggle_subtask_rederives_linked_goal() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());
        let subtask = engine.state().project("p1").unwrap().subtasks[1].id.clone();

        engine.toggle_subtask("p1", &subtask);

        assert_eq!(engine.state().goal("g2").unwrap().progress, 50.0);
    }

    #[test]
    fn test_add_subtask_to_unknown_project() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());
        assert_eq!(engine.add_subtask("missing", "x"), None);
        assert!(engine.add_subtask("p1", "Order parts").is_some());
        assert_eq!(engine.state().goal("g2").unwrap().progress, 20.0);
    }

    #[test]
    fn test_application_status_change_updates_offer_goal() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());
        let id = engine.add_application("Acme", "Intern", ApplicationStatus::Saved);
        let saved = engine.state().job_applications.iter().find(|a| a.id == id).unwrap();
        assert_eq!(saved.date_applied, None);
        let offers_before = engine.state().goal("g1").unwrap().progress;

        engine.set_application_status(&id, ApplicationStatus::Offer);

        let app = engine.state().job_applications.iter().find(|a| a.id == id).unwrap();
        assert_eq!(app.date_applied, Some(today()));
        assert_eq!(engine.state().goal("g1").unwrap().progress, offers_before + 1.0);
    }

    #[test]
    fn test_log_gym_session_counts_toward_gym_goal() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());
        let before = engine.state().gym_sessions.len();

        engine.log_gym_session(DayType::Push, Vec::new(), Some(60));

        assert_eq!(engine.state().goal("g4").unwrap().progress, (before + 1) as f64);
    }

    #[test]
    fn test_course_helpers_leave_goals_shared() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());
        let goals = Arc::clone(&engine.state().goals);

        engine.toggle_homework("c1", "hw1");
        engine.toggle_lecture("c1", "l2");
        engine.set_exam_prep("c1", "e1", PrepStatus::Ready);

        let course = &engine.state().courses[0];
        assert!(course.homeworks[0].completed);
        assert!(course.lectures[1].studied);
        assert_eq!(course.exams[0].prep_status, PrepStatus::Ready);
        assert!(Arc::ptr_eq(&goals, &engine.state().goals));
    }

    #[test]
    fn test_ec_task_add_and_toggle() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());

        let id = engine.add_ec_task("ec1", "Order bolts").unwrap();
        engine.toggle_ec_task("ec1", &id);

        let ec = engine.state().extracurriculars.iter().find(|e| e.id == "ec1").unwrap();
        assert!(ec.tasks.iter().any(|t| t.id == id && t.completed));
        assert_eq!(engine.add_ec_task("nope", "x"), None);
    }

    #[test]
    fn test_timer_completion_records_session_and_notifies() {
        let temp = tempdir().unwrap();
        let notifier = RecordingNotifier::default();
        let sent = Rc::clone(&notifier.sent);
        let mut engine = engine_in(temp.path()).with_notifier(notifier);
        let task_id = engine.add_task(NewTask::new("Problem set", TaskCategory::Course));
        let sessions_before = engine.state().sessions.len();

        assert!(engine.start_timer(Some(task_id.clone())));
        let sessions: Vec<FocusSession> =
            (0..FOCUS_SECONDS).filter_map(|_| engine.tick_timer()).collect();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].category, "course");
        assert_eq!(sessions[0].duration, 25);
        assert_eq!(engine.state().sessions.len(), sessions_before + 1);
        assert_eq!(engine.state().task(&task_id).unwrap().pomodoros, 1);
        assert_eq!(sent.borrow().len(), 1);
        assert!(!engine.timer().is_active());
    }

    #[test]
    fn test_notifications_can_be_disabled() {
        let temp = tempdir().unwrap();
        let notifier = RecordingNotifier::default();
        let sent = Rc::clone(&notifier.sent);
        let mut engine = engine_in(temp.path()).with_notifier(notifier);
        engine
            .set_config(NexusConfig {
                notifications: false,
                user_name: None,
            })
            .unwrap();

        engine.start_timer(None);
        for _ in 0..FOCUS_SECONDS {
            engine.tick_timer();
        }

        assert!(sent.borrow().is_empty());
        assert_eq!(engine.state().sessions.last().unwrap().category, "personal");
    }

    #[test]
    fn test_failed_notification_is_not_fatal() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path()).with_notifier(FailingNotifier);
        engine.start_timer(None);

        let completed = (0..FOCUS_SECONDS).filter_map(|_| engine.tick_timer()).count();

        assert_eq!(completed, 1);
    }

    #[test]
    fn test_stopped_timer_records_nothing() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());
        let before = engine.state().sessions.len();

        engine.start_timer(None);
        for _ in 0..100 {
            engine.tick_timer();
        }
        engine.stop_timer();
        for _ in 0..FOCUS_SECONDS {
            engine.tick_timer();
        }

        assert_eq!(engine.state().sessions.len(), before);
    }

    #[test]
    fn test_save_failure_keeps_in_memory_state() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();
        let mut engine = NexusEngine::with_storage(StorageConfig::with_root(blocker));

        let id = engine.add_task(NewTask::new("Still here", TaskCategory::Personal));

        assert!(engine.state().task(&id).is_some());
    }

    #[test]
    fn test_habit_and_daily_toggles_use_today() {
        let temp = tempdir().unwrap();
        let mut engine = engine_in(temp.path());
        let habit = engine.add_habit("Stretch", "🧘");

        engine.toggle_habit(&habit);
        engine.toggle_daily("d1");

        let h = engine.state().habit(&habit).unwrap();
        assert_eq!(h.streak, 1);
        assert_eq!(h.history, vec![today()]);
        assert!(engine
            .state()
            .dailies_done_on(&today())
            .contains(&"d1".to_string()));
    }
}
