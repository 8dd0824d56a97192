//! App preferences (`config.json`).
//!
//! Loading never fails: a missing file gives defaults, a malformed one gives
//! defaults and a warning.

use crate::error::{NexusError, Result};
use crate::storage::StorageConfig;
use crate::store::atomic_write;
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

fn default_notifications() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NexusConfig {
    /// Notify when a focus block finishes.
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    /// Name used by the coach greeting.
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Default for NexusConfig {
    fn default() -> Self {
        Self {
            notifications: default_notifications(),
            user_name: None,
        }
    }
}

/// Loads the configuration, returning defaults if the file is missing or bad.
pub fn load_config(storage: &StorageConfig) -> NexusConfig {
    match try_load_config(storage) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load config, using defaults");
            NexusConfig::default()
        }
    }
}

fn try_load_config(storage: &StorageConfig) -> Result<NexusConfig> {
    let path = storage.config_file();
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(NexusConfig::default()),
        Err(e) => {
            return Err(NexusError::Io {
                context: format!("reading {}", path.display()),
                source: e,
            })
        }
    };
    serde_json::from_str(&content).map_err(|e| NexusError::ConfigMalformed {
        path,
        details: e.to_string(),
    })
}

/// Saves the configuration to disk.
pub fn save_config(storage: &StorageConfig, config: &NexusConfig) -> Result<()> {
    fs::create_dir_all(storage.root()).map_err(|e| NexusError::Io {
        context: format!("creating {}", storage.root().display()),
        source: e,
    })?;
    let content = serde_json::to_string_pretty(config).map_err(|e| NexusError::Json {
        context: "serializing config".to_string(),
        source: e,
    })?;
    atomic_write(&storage.config_file(), &content)
}
