//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all taskmate operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: the store plus the in-memory [`AppState`], loaded once in [`TaskmateApi::new`]
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings → [`TodoId`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: No stdout, stderr, or formatting
//!
//! ## Selectors
//!
//! Methods taking `selector: &str` accept a display index of the visible list
//! (`"2"`), a full id, or an id prefix. See [`crate::index`].
//!
//! ## Generic Over DataStore
//!
//! `TaskmateApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TaskmateApi<FileStore>`
//! - Testing: `TaskmateApi<InMemoryStore>`

use crate::commands::{self, helpers::resolve_selector, AppState, CmdResult};
use crate::error::{Result, TaskmateError};
use crate::index::parse_selector;
use crate::model::{is_acceptable_text, TodoId, TodoList};
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for taskmate operations.
pub struct TaskmateApi<S: DataStore> {
    store: S,
    state: AppState,
}

impl<S: DataStore> TaskmateApi<S> {
    /// Restore the saved list from `store` and start a session over it.
    pub fn new(store: S) -> Result<Self> {
        let todos = TodoList::from_records(store.load()?);
        log::debug!("session started with {} todos", todos.len());
        Ok(Self {
            store,
            state: AppState::new(todos),
        })
    }

    pub fn with_show_completed(mut self, show_completed: bool) -> Self {
        self.state.show_completed = show_completed;
        self
    }

    pub fn todos(&self) -> &TodoList {
        &self.state.todos
    }

    pub fn pending_input(&self) -> &str {
        &self.state.input
    }

    pub fn show_completed(&self) -> bool {
        self.state.show_completed
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }

    pub fn resolve(&self, selector: &str) -> Result<TodoId> {
        let selector = parse_selector(selector)?;
        resolve_selector(&self.state, &selector)
    }

    pub fn add_todo(&mut self, text: impl Into<String>) -> Result<CmdResult> {
        commands::add::run(&mut self.store, &mut self.state, text.into())
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> CmdResult {
        commands::input::run(&mut self.state, text.into())
    }

    pub fn submit(&mut self) -> Result<CmdResult> {
        commands::add::submit(&mut self.store, &mut self.state)
    }

    pub fn begin_edit(&mut self, selector: &str) -> Result<CmdResult> {
        let id = self.resolve(selector)?;
        self.begin_edit_id(&id)
    }

    pub fn begin_edit_id(&mut self, id: &TodoId) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, &mut self.state, id)
    }

    /// Edit and resubmit in one step: the todo is replaced by a new one
    /// holding `text`. The text is checked before anything is removed.
    pub fn replace_todo(&mut self, selector: &str, text: impl Into<String>) -> Result<CmdResult> {
        let text = text.into();
        if !is_acceptable_text(&text) {
            return Err(TaskmateError::TooShort {
                len: text.chars().count(),
            });
        }
        let id = self.resolve(selector)?;
        commands::edit::replace(&mut self.store, &mut self.state, &id, text)
    }

    pub fn delete_todo(&mut self, selector: &str) -> Result<CmdResult> {
        let id = self.resolve(selector)?;
        self.delete_todo_id(&id)
    }

    pub fn delete_todo_id(&mut self, id: &TodoId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &mut self.state, id)
    }

    pub fn toggle_todo(&mut self, selector: &str) -> Result<CmdResult> {
        let id = self.resolve(selector)?;
        self.toggle_todo_id(&id)
    }

    pub fn toggle_todo_id(&mut self, id: &TodoId) -> Result<CmdResult> {
        commands::toggle::run(&mut self.store, &mut self.state, id)
    }

    pub fn set_filter(&mut self, show_completed: bool) -> CmdResult {
        commands::filter::run(&mut self.state, show_completed)
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.state)
    }
}
