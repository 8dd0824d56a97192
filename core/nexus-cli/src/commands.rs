//! Subcommand handlers.
//!
//! Lookups the user typed (task ids, habit ids, ...) are checked here so a
//! typo is reported instead of silently doing nothing.

use crate::{
    CaptureCommand, Commands, CourseCommand, EcCommand, HabitCommand, JobCommand,
    ProjectCommand, StrategyCommand, TaskCommand,
};
use chrono::{Duration as DayOffset, Local, Timelike, Utc};
use nexus_core::habits::week_strip;
use nexus_core::stats::{self, course_progress};
use nexus_core::{
    coach, today, Course, Extracurricular, NewTask, NexusConfig, NexusEngine, Task, TimerStatus,
};
use std::io::Write;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

type CmdResult = Result<(), String>;

pub fn run(engine: &mut NexusEngine, command: Commands) -> CmdResult {
    match command {
        Commands::Status => status(engine),
        Commands::Task(cmd) => task(engine, cmd),
        Commands::Goals => {
            goals(engine);
            Ok(())
        }
        Commands::Habit(cmd) => habit(engine, cmd),
        Commands::Daily { id } => daily(engine, id),
        Commands::Capture(cmd) => capture(engine, cmd),
        Commands::Strategy(cmd) => strategy(engine, cmd),
        Commands::Project(cmd) => project(engine, cmd),
        Commands::Job(cmd) => job(engine, cmd),
        Commands::Gym { day_type, minutes } => {
            let id = engine.log_gym_session(day_type, Vec::new(), minutes);
            println!("Logged {:?} session {}", day_type, id);
            goals(engine);
            Ok(())
        }
        Commands::Course(cmd) => course(engine, cmd),
        Commands::Ec(cmd) => ec(engine, cmd),
        Commands::Timer { task } => timer(engine, task),
        Commands::Coach { question } => {
            if question.is_empty() {
                println!("{}", coach::greeting(engine.config().user_name.as_deref()));
            } else {
                let reply = coach::reply(&question.join(" "), &engine.state().tasks);
                println!("{}", reply);
            }
            Ok(())
        }
        Commands::Config {
            notifications,
            name,
        } => config(engine, notifications, name),
    }
}

fn require_task(engine: &NexusEngine, id: &str) -> CmdResult {
    match engine.state().task(id) {
        Some(_) => Ok(()),
        None => Err(format!("No task with id {}", id)),
    }
}

fn require_habit(engine: &NexusEngine, id: &str) -> CmdResult {
    match engine.state().habit(id) {
        Some(_) => Ok(()),
        None => Err(format!("No habit with id {}", id)),
    }
}

fn require_capture(engine: &NexusEngine, id: &str) -> CmdResult {
    if engine.state().captures.iter().any(|c| c.id == id) {
        Ok(())
    } else {
        Err(format!("No capture with id {}", id))
    }
}

fn require_strategy(engine: &NexusEngine, index: usize) -> CmdResult {
    if index < engine.state().strategies.len() {
        Ok(())
    } else {
        Err(format!("No strategy at position {}", index))
    }
}

fn find_course<'a>(engine: &'a NexusEngine, id: &str) -> Result<&'a Course, String> {
    engine
        .state()
        .courses
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| format!("No course with id {}", id))
}

fn find_ec<'a>(engine: &'a NexusEngine, id: &str) -> Result<&'a Extracurricular, String> {
    engine
        .state()
        .extracurriculars
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| format!("No extracurricular with id {}", id))
}

fn print_task(task: &Task) {
    let mark = if task.completed { "x" } else { " " };
    let due = task.due.as_deref().unwrap_or("");
    println!(
        "[{}] {:<9} {:<8} {:<6} {:<10} {}",
        mark,
        task.id,
        task.category.as_str(),
        format!("{:?}", task.priority).to_lowercase(),
        due,
        task.title
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

fn status(engine: &NexusEngine) -> CmdResult {
    let state = engine.state();
    let day = today();

    let greeting = stats::greeting_for_hour(Local::now().hour());
    match engine.config().user_name.as_deref() {
        Some(name) => println!("{}, {}.", greeting, name),
        None => println!("{}.", greeting),
    }
    println!("\"{}\"\n", stats::daily_quote(state, Utc::now()));

    match stats::do_next(state) {
        Some(task) => println!("Do next: {} ({})", task.title, task.id),
        None => println!("Do next: nothing open"),
    }

    let today_stats = stats::today_summary(state, &day);
    println!(
        "Today: {}/{} tasks due done, {} focus min, {}/{} habits, {}/{} dailies",
        today_stats.tasks_completed,
        today_stats.tasks_due,
        today_stats.focus_minutes,
        today_stats.habits_done,
        state.habits.len(),
        today_stats.dailies_done,
        state.dailies.len()
    );

    let upcoming = stats::upcoming_deadlines(state);
    if !upcoming.is_empty() {
        println!("\nUpcoming:");
        for task in upcoming {
            print_task(task);
        }
    }

    println!("\nFocus by category:");
    for (category, minutes) in stats::focus_by_category(state) {
        println!("  {:<8} {:>5} min", category.as_str(), minutes);
    }

    println!();
    goals(engine);
    Ok(())
}

fn goals(engine: &NexusEngine) {
    println!("Goals:");
    for goal in engine.state().goals.iter() {
        println!(
            "  {:<4} {:<40} {}/{} {}",
            goal.id, goal.title, goal.progress, goal.target, goal.unit
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Collections
// ─────────────────────────────────────────────────────────────────────────────

fn task(engine: &mut NexusEngine, cmd: TaskCommand) -> CmdResult {
    match cmd {
        TaskCommand::Add {
            title,
            category,
            priority,
            due,
            course,
        } => {
            let title = title.join(" ");
            if title.trim().is_empty() {
                return Err("Task title is empty".to_string());
            }
            let id = engine.add_task(NewTask {
                priority,
                due,
                course,
                ..NewTask::new(title, category)
            });
            println!("Added task {}", id);
        }
        TaskCommand::Done { id, undo } => {
            require_task(engine, &id)?;
            engine.complete_task(&id, !undo);
        }
        TaskCommand::Rm { id } => {
            require_task(engine, &id)?;
            engine.delete_task(&id);
        }
        TaskCommand::List { all } => {
            if all {
                engine.state().tasks.iter().for_each(print_task);
            } else {
                stats::focus_queue(engine.state())
                    .into_iter()
                    .for_each(print_task);
            }
        }
        TaskCommand::Search { query } => {
            for task in stats::search_tasks(engine.state(), &query.join(" ")) {
                print_task(task);
            }
        }
    }
    Ok(())
}

fn habit(engine: &mut NexusEngine, cmd: HabitCommand) -> CmdResult {
    match cmd {
        HabitCommand::Add { name, icon } => {
            let id = engine.add_habit(&name, &icon);
            println!("Added habit {}", id);
        }
        HabitCommand::Toggle { id } => {
            require_habit(engine, &id)?;
            engine.toggle_habit(&id);
            if let Some(h) = engine.state().habit(&id) {
                println!("{} {} streak {}", h.icon, h.name, h.streak);
            }
        }
        HabitCommand::Rm { id } => {
            require_habit(engine, &id)?;
            engine.delete_habit(&id);
        }
        HabitCommand::List => {
            let now = Utc::now();
            let days: Vec<String> = (0..7)
                .rev()
                .map(|back| nexus_core::ids::date_of(now - DayOffset::days(back)))
                .collect();
            for h in engine.state().habits.iter() {
                let strip: String = week_strip(h, &days)
                    .into_iter()
                    .map(|done| if done { '■' } else { '·' })
                    .collect();
                println!(
                    "{:<9} {} {:<24} {} streak {}/{}",
                    h.id, h.icon, h.name, strip, h.streak, h.target
                );
            }
        }
    }
    Ok(())
}

fn daily(engine: &mut NexusEngine, id: Option<String>) -> CmdResult {
    if let Some(id) = id {
        if !engine.state().dailies.iter().any(|d| d.id == id) {
            return Err(format!("No daily with id {}", id));
        }
        engine.toggle_daily(&id);
    }
    let day = today();
    let done = engine.state().dailies_done_on(&day);
    for d in engine.state().dailies.iter() {
        let mark = if done.contains(&d.id) { "x" } else { " " };
        println!("[{}] {:<4} {} {}", mark, d.id, d.icon, d.title);
    }
    Ok(())
}

fn capture(engine: &mut NexusEngine, cmd: CaptureCommand) -> CmdResult {
    match cmd {
        CaptureCommand::Add { text } => match engine.add_capture(&text.join(" ")) {
            Some(id) => println!("Captured {}", id),
            None => return Err("Nothing to capture".to_string()),
        },
        CaptureCommand::Process { id } => {
            let task_id = engine
                .process_capture(&id)
                .ok_or_else(|| format!("No capture with id {}", id))?;
            if let Some(task) = engine.state().task(&task_id) {
                print_task(task);
            }
        }
        CaptureCommand::Rm { id } => {
            require_capture(engine, &id)?;
            engine.delete_capture(&id);
        }
        CaptureCommand::List => {
            for c in engine.state().captures.iter() {
                println!("{:<9} {}", c.id, c.text);
            }
        }
    }
    Ok(())
}

fn strategy(engine: &mut NexusEngine, cmd: StrategyCommand) -> CmdResult {
    match cmd {
        StrategyCommand::Add { text } => engine.add_strategy(&text.join(" ")),
        StrategyCommand::Edit { index, text } => {
            require_strategy(engine, index)?;
            engine.update_strategy(index, &text.join(" "));
        }
        StrategyCommand::Rm { index } => {
            require_strategy(engine, index)?;
            engine.delete_strategy(index);
        }
        StrategyCommand::List => {
            for (i, text) in engine.state().strategies.iter().enumerate() {
                println!("{:>2}. {}", i, text);
            }
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature Views
// ─────────────────────────────────────────────────────────────────────────────

fn project(engine: &mut NexusEngine, cmd: ProjectCommand) -> CmdResult {
    match cmd {
        ProjectCommand::Add { name, description } => {
            let id = engine.add_project(&name, description.as_deref());
            println!("Added project {}", id);
        }
        ProjectCommand::Subtask { project, title } => {
            engine
                .add_subtask(&project, &title.join(" "))
                .ok_or_else(|| format!("No project with id {}", project))?;
        }
        ProjectCommand::Toggle { project, subtask } => {
            if engine.state().project(&project).is_none() {
                return Err(format!("No project with id {}", project));
            }
            engine.toggle_subtask(&project, &subtask);
        }
        ProjectCommand::List => {
            for p in engine.state().projects.iter() {
                println!(
                    "{:<9} {:<28} {:>3}% ({}/{})",
                    p.id,
                    p.name,
                    p.completion_percent(),
                    p.completed_subtasks(),
                    p.subtasks.len()
                );
                for s in &p.subtasks {
                    let mark = if s.completed { "x" } else { " " };
                    println!("    [{}] {:<9} {}", mark, s.id, s.title);
                }
            }
        }
    }
    Ok(())
}

fn job(engine: &mut NexusEngine, cmd: JobCommand) -> CmdResult {
    match cmd {
        JobCommand::Add {
            company,
            role,
            status,
        } => {
            let id = engine.add_application(&company, &role, status);
            println!("Added application {}", id);
        }
        JobCommand::Status { id, status } => {
            if !engine.state().job_applications.iter().any(|a| a.id == id) {
                return Err(format!("No application with id {}", id));
            }
            engine.set_application_status(&id, status);
        }
        JobCommand::List => {
            for a in engine.state().job_applications.iter() {
                println!(
                    "{:<9} {:<16} {:<24} {:?} {}",
                    a.id,
                    a.company,
                    a.role,
                    a.status,
                    a.date_applied.as_deref().unwrap_or("")
                );
            }
        }
    }
    Ok(())
}

fn course(engine: &mut NexusEngine, cmd: CourseCommand) -> CmdResult {
    match cmd {
        CourseCommand::Homework { course, homework } => {
            if !find_course(engine, &course)?.homeworks.iter().any(|h| h.id == homework) {
                return Err(format!("No homework {} in course {}", homework, course));
            }
            engine.toggle_homework(&course, &homework);
        }
        CourseCommand::Lecture { course, lecture } => {
            if !find_course(engine, &course)?.lectures.iter().any(|l| l.id == lecture) {
                return Err(format!("No lecture {} in course {}", lecture, course));
            }
            engine.toggle_lecture(&course, &lecture);
        }
        CourseCommand::Exam {
            course,
            exam,
            status,
        } => {
            if !find_course(engine, &course)?.exams.iter().any(|e| e.id == exam) {
                return Err(format!("No exam {} in course {}", exam, course));
            }
            engine.set_exam_prep(&course, &exam, status);
        }
        CourseCommand::List => {
            for c in engine.state().courses.iter() {
                let p = course_progress(c);
                println!(
                    "{:<4} {:<10} {:<24} lectures {}/{}  homework {}/{}  exams ready {}/{}",
                    c.id,
                    c.code,
                    c.name,
                    p.lectures_studied,
                    p.lectures_total,
                    p.homework_done,
                    p.homework_total,
                    p.exams_ready,
                    p.exams_total
                );
            }
        }
    }
    Ok(())
}

fn ec(engine: &mut NexusEngine, cmd: EcCommand) -> CmdResult {
    match cmd {
        EcCommand::Add { ec, title } => {
            engine
                .add_ec_task(&ec, &title.join(" "))
                .ok_or_else(|| format!("No extracurricular with id {}", ec))?;
        }
        EcCommand::Toggle { ec, task } => {
            if !find_ec(engine, &ec)?.tasks.iter().any(|t| t.id == task) {
                return Err(format!("No task {} in extracurricular {}", task, ec));
            }
            engine.toggle_ec_task(&ec, &task);
        }
        EcCommand::List => {
            for e in engine.state().extracurriculars.iter() {
                println!("{:<5} {} {}", e.id, e.name, e.role.as_deref().unwrap_or(""));
                for t in &e.tasks {
                    let mark = if t.completed { "x" } else { " " };
                    println!("    [{}] {:<9} {}", mark, t.id, t.title);
                }
            }
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Timer & Config
// ─────────────────────────────────────────────────────────────────────────────

/// Runs one block, ticking once per second. Lines typed on stdin are read
/// on a separate thread and applied between ticks. Ctrl-C or `q` abandons
/// the block without recording a session.
fn timer(engine: &mut NexusEngine, task: Option<String>) -> CmdResult {
    if let Some(id) = task.as_deref() {
        require_task(engine, id)?;
    }
    if !engine.start_timer(task) {
        return Err("A focus block is already running".to_string());
    }

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    println!("p: pause/resume  t [id]: link task  q: stop");

    let mut stdout = std::io::stdout();
    loop {
        while let Ok(line) = rx.try_recv() {
            match timer_input(engine, &line) {
                Ok(true) => {}
                Ok(false) => {
                    println!("\rFocus block abandoned");
                    return Ok(());
                }
                Err(e) => println!("\r{}", e),
            }
        }

        let paused = engine.timer().status() == TimerStatus::Paused;
        print!(
            "\r🍅 {}{} ",
            engine.timer().display(),
            if paused { " (paused)" } else { "" }
        );
        let _ = stdout.flush();
        thread::sleep(Duration::from_secs(1));
        if let Some(session) = engine.tick_timer() {
            println!(
                "\rFocus block done: {} min of {}",
                session.duration, session.category
            );
            return Ok(());
        }
    }
}

/// Applies one line typed while a block runs. `Ok(false)` means stop.
fn timer_input(engine: &mut NexusEngine, line: &str) -> Result<bool, String> {
    let mut words = line.split_whitespace();
    match words.next() {
        None => {}
        Some("p") => engine.toggle_pause(),
        Some("t") => {
            let task = words.next().map(str::to_string);
            if let Some(id) = task.as_deref() {
                require_task(engine, id)?;
            }
            engine.link_timer_task(task);
        }
        Some("q") => {
            engine.stop_timer();
            return Ok(false);
        }
        Some(other) => return Err(format!("Unknown input {:?} (p, t [id], q)", other)),
    }
    Ok(true)
}

fn config(engine: &mut NexusEngine, notifications: Option<bool>, name: Option<String>) -> CmdResult {
    if notifications.is_some() || name.is_some() {
        let current = engine.config().clone();
        let next = NexusConfig {
            notifications: notifications.unwrap_or(current.notifications),
            user_name: name.or(current.user_name),
        };
        engine.set_config(next)?;
    }
    let config = engine.config();
    println!("notifications: {}", config.notifications);
    println!("name: {}", config.user_name.as_deref().unwrap_or("(unset)"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::{PrepStatus, StorageConfig, TaskCategory};
    use tempfile::TempDir;

    fn engine_in(temp: &TempDir) -> NexusEngine {
        NexusEngine::with_storage(StorageConfig::with_root(temp.path().to_path_buf()))
    }

    fn rejects(engine: &mut NexusEngine, command: Commands) {
        let before = engine.state().clone();
        assert!(run(engine, command).is_err());
        assert_eq!(*engine.state(), before);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Id Checks
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_unknown_habit_and_capture_ids_are_reported() {
        let temp = TempDir::new().unwrap();
        let mut engine = engine_in(&temp);

        rejects(&mut engine, Commands::Habit(HabitCommand::Rm { id: "nope".into() }));
        rejects(&mut engine, Commands::Capture(CaptureCommand::Rm { id: "nope".into() }));
    }

    #[test]
    fn test_unknown_course_items_are_reported() {
        let temp = TempDir::new().unwrap();
        let mut engine = engine_in(&temp);

        rejects(
            &mut engine,
            Commands::Course(CourseCommand::Homework {
                course: "c9".into(),
                homework: "hw1".into(),
            }),
        );
        rejects(
            &mut engine,
            Commands::Course(CourseCommand::Homework {
                course: "c1".into(),
                homework: "hw9".into(),
            }),
        );
        rejects(
            &mut engine,
            Commands::Course(CourseCommand::Lecture {
                course: "c1".into(),
                lecture: "l9".into(),
            }),
        );
        rejects(
            &mut engine,
            Commands::Course(CourseCommand::Exam {
                course: "c1".into(),
                exam: "e9".into(),
                status: PrepStatus::Ready,
            }),
        );
    }

    #[test]
    fn test_unknown_ec_task_is_reported() {
        let temp = TempDir::new().unwrap();
        let mut engine = engine_in(&temp);

        rejects(
            &mut engine,
            Commands::Ec(EcCommand::Toggle {
                ec: "ec1".into(),
                task: "ect3".into(),
            }),
        );
        rejects(
            &mut engine,
            Commands::Ec(EcCommand::Toggle {
                ec: "ec9".into(),
                task: "ect1".into(),
            }),
        );
    }

    #[test]
    fn test_known_ids_still_apply() {
        let temp = TempDir::new().unwrap();
        let mut engine = engine_in(&temp);

        run(
            &mut engine,
            Commands::Course(CourseCommand::Homework {
                course: "c1".into(),
                homework: "hw1".into(),
            }),
        )
        .unwrap();
        run(
            &mut engine,
            Commands::Ec(EcCommand::Toggle {
                ec: "ec1".into(),
                task: "ect1".into(),
            }),
        )
        .unwrap();
        run(&mut engine, Commands::Habit(HabitCommand::Rm { id: "h1".into() })).unwrap();

        let state = engine.state();
        assert!(state.courses[0].homeworks[0].completed);
        assert!(state.extracurriculars[0].tasks[0].completed);
        assert!(state.habit("h1").is_none());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Strategies
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_strategy_edit_replaces_text_at_position() {
        let temp = TempDir::new().unwrap();
        let mut engine = engine_in(&temp);

        run(
            &mut engine,
            Commands::Strategy(StrategyCommand::Edit {
                index: 0,
                text: vec!["Deep".into(), "work".into(), "first".into()],
            }),
        )
        .unwrap();
        assert_eq!(engine.state().strategies[0], "Deep work first");

        let past_end = engine.state().strategies.len();
        rejects(
            &mut engine,
            Commands::Strategy(StrategyCommand::Edit {
                index: past_end,
                text: vec!["x".into()],
            }),
        );
        rejects(&mut engine, Commands::Strategy(StrategyCommand::Rm { index: past_end }));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Timer Input
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_timer_input_pauses_relinks_and_quits() {
        let temp = TempDir::new().unwrap();
        let mut engine = engine_in(&temp);
        let task = engine.add_task(NewTask::new("Lab report", TaskCategory::Course));
        assert!(engine.start_timer(None));

        assert_eq!(timer_input(&mut engine, "p"), Ok(true));
        assert_eq!(engine.timer().status(), TimerStatus::Paused);
        assert_eq!(timer_input(&mut engine, "p"), Ok(true));
        assert_eq!(engine.timer().status(), TimerStatus::Running);

        assert!(timer_input(&mut engine, "t nope").is_err());
        assert_eq!(engine.timer().task_id(), None);
        assert_eq!(timer_input(&mut engine, &format!("t {}", task)), Ok(true));
        assert_eq!(engine.timer().task_id(), Some(task.as_str()));
        assert_eq!(timer_input(&mut engine, "t"), Ok(true));
        assert_eq!(engine.timer().task_id(), None);

        assert!(timer_input(&mut engine, "x").is_err());
        assert_eq!(timer_input(&mut engine, "   "), Ok(true));

        assert_eq!(timer_input(&mut engine, "q"), Ok(false));
        assert_eq!(engine.timer().status(), TimerStatus::Idle);
        assert!(engine.state().sessions.is_empty());
    }
}
