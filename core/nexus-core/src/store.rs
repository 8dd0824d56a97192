//! Loading and saving the state document.
//!
//! # Slots
//!
//! The whole [`AppState`] lives in one JSON document, `nexus_data.json`. If
//! that slot is missing or empty, the legacy `momentum_data.json` is read
//! instead. Writes always go to the primary slot.
//!
//! # Migration
//!
//! There is no version field. A saved document is merged onto the seed
//! template one top-level key at a time:
//!
//! - a known collection key replaces the template's value wholesale when it has
//!   the right container shape (array, or object for `dailyCompletions`),
//!   otherwise the template value stays
//! - `tasks` must also be non-empty to replace the template
//! - each collection is deserialized on its own; one that fails (an unknown
//!   enum value, a missing required field) keeps the template value and logs a
//!   warning, while its siblings still load
//! - unknown keys are carried along untouched and written back on save
//!
//! Fields the saved document lacks therefore keep their seed value.
//!
//! # Failure Handling
//!
//! [`load_state`] never fails: a missing or unreadable document, or one that
//! is not a JSON object, yields the seed state and a log line. [`save_state`] reports errors, and the
//! caller decides whether to care.

use crate::defaults::default_state;
use crate::error::{NexusError, Result};
use crate::storage::StorageConfig;
use crate::types::AppState;
use fs_err as fs;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Top-level keys that must hold an array to be taken from a saved document.
const ARRAY_FIELDS: [&str; 14] = [
    "tasks",
    "goals",
    "habits",
    "sessions",
    "captures",
    "events",
    "projects",
    "courses",
    "jobApplications",
    "gymSessions",
    "extracurriculars",
    "dailies",
    "strategies",
    "motivationalQuotes",
];

/// Top-level keys that must hold an object.
const OBJECT_FIELDS: [&str; 1] = ["dailyCompletions"];

/// Loads the saved state, falling back to the seed state on any problem.
pub fn load_state(storage: &StorageConfig) -> AppState {
    match try_load_state(storage) {
        Ok(Some(state)) => state,
        Ok(None) => {
            tracing::debug!(root = %storage.root().display(), "No saved state, using defaults");
            default_state()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load saved state, using defaults");
            default_state()
        }
    }
}

/// Loads the saved state. `Ok(None)` when neither slot holds a document.
pub fn try_load_state(storage: &StorageConfig) -> Result<Option<AppState>> {
    let (path, content) = match read_slot(storage)? {
        Some(slot) => slot,
        None => return Ok(None),
    };

    let saved: Value = serde_json::from_str(&content).map_err(|e| NexusError::Json {
        context: format!("parsing {}", path.display()),
        source: e,
    })?;

    let saved = match saved {
        Value::Object(map) => map,
        other => {
            return Err(NexusError::StateMalformed {
                path,
                details: format!("expected an object, found {}", json_kind(&other)),
            })
        }
    };

    Ok(Some(merge_saved(&default_state(), saved)))
}

/// Merges a saved document onto `defaults` (see module docs).
pub fn merge_saved(defaults: &AppState, saved: Map<String, Value>) -> AppState {
    let mut state = defaults.clone();

    for (key, value) in saved {
        if !accepts_saved_value(&key, &value) {
            tracing::debug!(field = %key, "Ignoring saved field with unexpected shape");
            continue;
        }
        match key.as_str() {
            "tasks" => replace_field(&mut state.tasks, &key, value),
            "goals" => replace_field(&mut state.goals, &key, value),
            "habits" => replace_field(&mut state.habits, &key, value),
            "sessions" => replace_field(&mut state.sessions, &key, value),
            "captures" => replace_field(&mut state.captures, &key, value),
            "events" => replace_field(&mut state.events, &key, value),
            "projects" => replace_field(&mut state.projects, &key, value),
            "courses" => replace_field(&mut state.courses, &key, value),
            "jobApplications" => replace_field(&mut state.job_applications, &key, value),
            "gymSessions" => replace_field(&mut state.gym_sessions, &key, value),
            "extracurriculars" => replace_field(&mut state.extracurriculars, &key, value),
            "dailies" => replace_field(&mut state.dailies, &key, value),
            "dailyCompletions" => replace_field(&mut state.daily_completions, &key, value),
            "strategies" => replace_field(&mut state.strategies, &key, value),
            "motivationalQuotes" => replace_field(&mut state.motivational_quotes, &key, value),
            _ => {
                state.extra.insert(key, value);
            }
        }
    }

    state
}

/// Replaces one collection with its saved value. A value that does not
/// deserialize leaves the default in place; sibling fields are unaffected.
fn replace_field<T: DeserializeOwned>(slot: &mut Arc<T>, key: &str, value: Value) {
    match serde_json::from_value::<T>(value) {
        Ok(parsed) => *slot = Arc::new(parsed),
        Err(e) => {
            tracing::warn!(field = %key, error = %e, "Keeping default for malformed saved field");
        }
    }
}

fn accepts_saved_value(key: &str, value: &Value) -> bool {
    if key == "tasks" {
        return value.as_array().is_some_and(|tasks| !tasks.is_empty());
    }
    if ARRAY_FIELDS.contains(&key) {
        return value.is_array();
    }
    if OBJECT_FIELDS.contains(&key) {
        return value.is_object();
    }
    true
}

fn read_slot(storage: &StorageConfig) -> Result<Option<(PathBuf, String)>> {
    for path in [storage.state_file(), storage.legacy_state_file()] {
        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => {
                tracing::debug!(path = %path.display(), "Skipping empty state slot");
            }
            Ok(content) => return Ok(Some((path, content))),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(NexusError::Io {
                    context: format!("reading {}", path.display()),
                    source: e,
                })
            }
        }
    }
    Ok(None)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Writes the full state to the primary slot.
pub fn save_state(storage: &StorageConfig, state: &AppState) -> Result<()> {
    let path = storage.state_file();
    fs::create_dir_all(storage.root()).map_err(|e| NexusError::Io {
        context: format!("creating {}", storage.root().display()),
        source: e,
    })?;

    let content = serde_json::to_string_pretty(state).map_err(|e| NexusError::Json {
        context: "serializing state".to_string(),
        source: e,
    })?;

    atomic_write(&path, &content)
}

/// Writes content to a file atomically using temp file + rename.
///
/// A crash mid-write leaves the previous document in place.
pub(crate) fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| NexusError::Io {
        context: format!("creating temp file in {}", dir.display()),
        source: e,
    })?;

    tmp.write_all(contents.as_bytes())
        .map_err(|e| NexusError::Io {
            context: format!("writing temp file for {}", path.display()),
            source: e,
        })?;

    tmp.flush().map_err(|e| NexusError::Io {
        context: format!("flushing temp file for {}", path.display()),
        source: e,
    })?;

    tmp.persist(path).map_err(|e| NexusError::Io {
        context: format!("persisting temp file to {}", path.display()),
        source: e.error,
    })?;

    Ok(())
}
