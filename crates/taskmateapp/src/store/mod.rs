//! # Storage Layer
//!
//! This module defines the persistence bridge for taskmate. The [`DataStore`] trait
//! lets the application keep its todo list in different places.
//!
//! ## Slot Model
//!
//! All state lives in a single string-keyed slot (key `todos` by default)
//! holding the whole list as a JSON array:
//!
//! ```text
//! [{"id": "…", "todo": "buy milk", "isCompleted": false}]
//! ```
//!
//! - **Load once**: the list is read at startup and kept in memory.
//! - **Save always**: every mutation rewrites the full slot. No batching, no
//!   partial writes.
//! - **Bad content is absence**: an unreadable-as-JSON or wrongly shaped slot
//!   loads as an empty list (with a warning), never as a fatal error.
//!   Only real I/O failures surface as errors.
//!
//! ## Implementations
//!
//! [`slot_store::SlotStore`] implements [`DataStore`] over any
//! [`backend::StorageBackend`]:
//!
//! - [`fs::FileStore`]: `SlotStore<FsBackend>`, one `<key>.json` file per slot.
//! - [`memory::InMemoryStore`]: `SlotStore<MemBackend>`, for testing logic without I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! └── todos.json    # The durable slot
//! ```

use crate::error::Result;
use crate::model::TodoRecord;
use std::path::PathBuf;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod slot_store;

/// Slot key the todo list is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Abstract interface for todo persistence.
pub trait DataStore {
    /// Restore the saved list, or an empty one if nothing usable is stored.
    fn load(&self) -> Result<Vec<TodoRecord>>;

    /// Overwrite the stored list with `todos`.
    fn save(&mut self, todos: &[TodoRecord]) -> Result<()>;

    /// Where the list is kept (for the `path` command)
    fn location(&self) -> PathBuf;
}
