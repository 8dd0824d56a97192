//! # nexus-core
//!
//! Core library for Nexus, a local-first personal productivity dashboard:
//! tasks, goals, habits, projects, courses, job applications, gym sessions,
//! extracurriculars, a weekly schedule, an inbox and a pomodoro timer.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency.
//! - **Not thread-safe**: Clients provide their own synchronization.
//! - **Immutable transitions**: Every change produces a new [`AppState`];
//!   untouched collections are shared by `Arc`.
//! - **Graceful degradation**: A missing or damaged save file loads the seed
//!   state. Save failures are logged, never fatal.
//! - **Derived goals**: Project, career and gym goals follow their source
//!   collections automatically (see [`derive`]).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nexus_core::{stats, NexusEngine};
//!
//! let mut engine = NexusEngine::new()?;
//! engine.add_capture("finish ME 30800 problem set asap");
//! let next = stats::do_next(engine.state());
//! ```

pub mod capture;
pub mod coach;
pub mod config;
pub mod defaults;
pub mod derive;
pub mod engine;
pub mod error;
pub mod habits;
pub mod ids;
pub mod mutations;
pub mod patterns;
pub mod stats;
pub mod storage;
pub mod store;
pub mod timer;
pub mod types;

pub use capture::{classify, CaptureContext, Classification};
pub use config::{load_config, save_config, NexusConfig};
pub use defaults::{default_state, DEFAULT_QUOTES};
pub use engine::NexusEngine;
pub use error::{NexusError, Result};
pub use ids::{gen_id, today};
pub use storage::StorageConfig;
pub use store::{load_state, save_state};
pub use timer::{FocusTimer, Notifier, SilentNotifier, TimerStatus, FOCUS_MINUTES, FOCUS_SECONDS};
pub use types::*;
