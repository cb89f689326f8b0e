//! # Configuration
//!
//! Taskmate configuration is managed by [`confique`], which handles layered loading
//! from a TOML file and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `TASKMATE_DATA_DIR`, `TASKMATE_STORAGE_KEY`, `TASKMATE_SHOW_COMPLETED`.
//! 2. **Config file**: `taskmate.toml` in the OS config directory (via `directories`),
//!    or the path in `TASKMATE_CONFIG`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Command-line flags sit above all of these; the CLI applies them after loading.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Directory holding `<storage_key>.json` |
//! | `storage_key` | `todos` | Slot key the list is stored under |
//! | `show_completed` | `true` | Whether finished todos are listed at startup |

use crate::error::{Result, TaskmateError};
use crate::store::fs::FileStore;
use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "taskmate.toml";
pub const CONFIG_PATH_ENV: &str = "TASKMATE_CONFIG";

/// Configuration for taskmate, stored in `taskmate.toml`.
#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskmateConfig {
    /// Directory holding the todo list. Defaults to the OS data directory.
    #[config(env = "TASKMATE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Key of the slot the list is stored under (file `<key>.json`).
    #[config(env = "TASKMATE_STORAGE_KEY", default = "todos")]
    pub storage_key: String,

    /// Whether finished todos are shown when taskmate starts.
    #[config(env = "TASKMATE_SHOW_COMPLETED", default = true)]
    pub show_completed: bool,
}

impl Default for TaskmateConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: crate::store::DEFAULT_STORAGE_KEY.to_string(),
            show_completed: true,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "taskmate", "taskmate")
}

/// Where the config file is looked for: `$TASKMATE_CONFIG`, else the OS config dir.
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    project_dirs().map(|d| d.config_dir().join(CONFIG_FILENAME))
}

impl TaskmateConfig {
    /// Load from the environment and the default config file.
    pub fn load() -> Result<Self> {
        Self::from_sources(config_file_path().as_deref(), true)
    }

    /// Load from an explicit file (missing is fine) and, optionally, the environment.
    pub fn from_sources(config_file: Option<&Path>, read_env: bool) -> Result<Self> {
        let mut builder = Self::builder();
        if read_env {
            builder = builder.env();
        }
        if let Some(path) = config_file {
            log::debug!("reading config from {}", path.display());
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| TaskmateError::Config(e.to_string()))
    }

    /// The configured data directory, or the OS default.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|d| d.data_dir().to_path_buf())
            .ok_or_else(|| TaskmateError::Config("Could not determine data directory".into()))
    }

    /// A file store over the configured directory and key.
    pub fn open_store(&self) -> Result<FileStore> {
        Ok(FileStore::new(self.data_dir()?).with_key(self.storage_key.clone()))
    }

    /// A commented sample `taskmate.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
