//! # Command Layer
//!
//! This module contains the **core business logic** of taskmate. Each command lives in its
//! own submodule and implements plain Rust functions over [`AppState`] and a
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Mutate the in-memory todo list through the four operations (add, begin-edit,
//!   delete, toggle-complete)
//! - Persist the whole list after every successful mutation
//! - Return structured `CmdResult` with affected todos and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** besides the store: no stdout, stderr, or terminal concerns
//! - **Argument parsing**: selectors are resolved by the API layer
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Mutation Protocol
//!
//! Every mutating command goes through [`helpers::commit`]: the state is
//! snapshotted, mutated, then saved. If the save fails the snapshot is put
//! back, so memory never runs ahead of the durable slot.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and check both the in-memory state and what was persisted.
//!
//! ## Command Modules
//!
//! - [`add`]: Create todos (directly or from the pending input)
//! - [`edit`]: Begin editing (remove + refill pending input)
//! - [`delete`]: Remove todos
//! - [`toggle`]: Flip completion
//! - [`input`]: Replace the pending input
//! - [`filter`]: Show/hide completed todos
//! - [`list`]: The visible list
//! - [`helpers`]: Selector resolution and the commit protocol

use crate::index::DisplayTodo;
use crate::model::{TodoList, TodoRecord};
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod helpers;
pub mod input;
pub mod list;
pub mod toggle;

/// Everything the single todo view holds in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub todos: TodoList,
    /// Text being composed or re-edited before submission.
    pub input: String,
    pub show_completed: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            todos: TodoList::new(),
            input: String::new(),
            show_completed: true,
        }
    }
}

impl AppState {
    pub fn new(todos: TodoList) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Totals shown under a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub total: usize,
    pub completed: usize,
    pub visible: usize,
    pub show_completed: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<TodoRecord>,
    pub listed_todos: Vec<DisplayTodo>,
    pub messages: Vec<CmdMessage>,
    /// Set when the command changed the pending input.
    pub pending_input: Option<String>,
    pub summary: Option<ListSummary>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<TodoRecord>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed_todos = todos;
        self
    }
}
