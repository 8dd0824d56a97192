//! Scripted productivity coach.
//!
//! Replies are picked by keyword, first match wins. The only state it reads is
//! the task list, to name the top open high-priority task.

use crate::types::{Priority, Task};

pub fn greeting(user_name: Option<&str>) -> String {
    let who = user_name.map(|n| format!(" {}", n)).unwrap_or_default();
    format!(
        "Hey{}! I'm your productivity coach. Ask me about focus, motivation, or how to tackle your tasks. What's on your mind?",
        who
    )
}

pub fn reply(question: &str, tasks: &[Task]) -> String {
    let q = question.to_lowercase();
    let has = |keys: &[&str]| keys.iter().any(|k| q.contains(k));

    if has(&["overwhelm", "stress", "too much"]) {
        "When everything feels like too much, simplify: pick ONE task, the most important one. \
         Finish it, then reassess. What's the single most critical thing right now?"
            .to_string()
    } else if has(&["focus", "what should"]) {
        match tasks
            .iter()
            .find(|t| !t.completed && t.priority == Priority::High)
        {
            Some(task) => format!(
                "Focus on: \"{}\". It's high priority. Start a 25-minute pomodoro and just begin.",
                task.title
            ),
            None => "No high-priority tasks! Work on your projects or send out some applications."
                .to_string(),
        }
    } else if has(&["motivation", "lazy", "procrastinat"]) {
        "Procrastination usually comes from fear or feeling overwhelmed. Try the 2-minute rule: \
         commit to just 2 minutes. What's one tiny step you can take right now?"
            .to_string()
    } else if has(&["internship", "resume"]) {
        "For applications:\n1. Tailor your resume per role\n2. Lead with projects and team work\n\
         3. Quantify achievements\n4. Reach out to people at the company\n5. Aim for 5-10 applications a week"
            .to_string()
    } else if has(&["schedule", "time"]) {
        "Look for the gaps between classes for quick tasks and protect your lightest days for \
         deep work. Want help planning a specific day?"
            .to_string()
    } else if has(&["gym"]) {
        "Consistency beats intensity. Stack it onto something you already do: go straight from \
         your last class. Even 20 minutes counts."
            .to_string()
    } else if has(&["help"]) {
        "I can help with:\n- What to focus on\n- Breaking down tasks\n- Motivation\n\
         - Day and week planning\n- Career advice\n- Study strategies\n- Habit building"
            .to_string()
    } else {
        "Good question! What specific part would you like to dig into?".to_string()
    }
}
