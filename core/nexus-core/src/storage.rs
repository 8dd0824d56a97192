//! Storage configuration and path management for Nexus.
//!
//! All on-disk locations are decided here. Production code uses
//! [`StorageConfig::new`], which points at `~/.nexus/`; tests inject a temp
//! directory through [`StorageConfig::with_root`].

use crate::error::{NexusError, Result};
use fs_err as fs;
use std::path::{Path, PathBuf};

/// Name of the primary state slot.
pub const STATE_SLOT: &str = "nexus_data";

/// Slot written by earlier releases. Read only when the primary slot is absent.
pub const LEGACY_STATE_SLOT: &str = "momentum_data";

/// Central configuration for all Nexus storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for all Nexus data (default: ~/.nexus)
    root: PathBuf,
}

impl StorageConfig {
    /// Storage rooted at `~/.nexus`.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or(NexusError::HomeDirNotFound)?;
        Ok(Self {
            root: home.join(".nexus"),
        })
    }

    /// Creates a StorageConfig with a custom root directory.
    /// Used for testing with temp directories.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Returns the root directory for Nexus data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Files
    // ─────────────────────────────────────────────────────────────────────────────

    /// Path to the primary state document.
    pub fn state_file(&self) -> PathBuf {
        self.slot_file(STATE_SLOT)
    }

    /// Path to the legacy state document.
    pub fn legacy_state_file(&self) -> PathBuf {
        self.slot_file(LEGACY_STATE_SLOT)
    }

    /// Path to config.json (app preferences).
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Path to the logs/ directory.
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    fn slot_file(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.json", slot))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Directory Creation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Ensures the root directory and standard subdirectories exist.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [self.root.clone(), self.logs_dir()] {
            fs::create_dir_all(&dir).map_err(|e| NexusError::Io {
                context: format!("creating {}", dir.display()),
                source: e,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_root_sets_custom_path() {
        let config = StorageConfig::with_root(PathBuf::from("/tmp/test-nexus"));
        assert_eq!(config.root(), Path::new("/tmp/test-nexus"));
    }

    #[test]
    fn test_state_file_path() {
        let config = StorageConfig::with_root(PathBuf::from("/tmp/nexus"));
        assert_eq!(
            config.state_file(),
            PathBuf::from("/tmp/nexus/nexus_data.json")
        );
    }

    #[test]
    fn test_legacy_state_file_path() {
        let config = StorageConfig::with_root(PathBuf::from("/tmp/nexus"));
        assert_eq!(
            config.legacy_state_file(),
            PathBuf::from("/tmp/nexus/momentum_data.json")
        );
    }

    #[test]
    fn test_config_file_path() {
        let config = StorageConfig::with_root(PathBuf::from("/tmp/nexus"));
        assert_eq!(config.config_file(), PathBuf::from("/tmp/nexus/config.json"));
    }

    #[test]
    fn test_ensure_dirs_creates_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join(".nexus");
        let config = StorageConfig::with_root(root.clone());

        config.ensure_dirs().unwrap();

        assert!(root.exists());
        assert!(config.logs_dir().exists());
    }
}
