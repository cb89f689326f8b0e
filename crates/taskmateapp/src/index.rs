//! # Display Indexes and Selectors
//!
//! Todos are identified by UUIDs, which are stable but miserable to type. The
//! UI therefore numbers the *visible* todos `1, 2, 3…` in display order and lets
//! users refer to a todo either by that number or by its id.
//!
//! ## Visibility
//!
//! The visible list is the stored list with completed todos dropped when the
//! "show completed" filter is off:
//!
//! ```text
//! visible = todos where show_completed || !is_completed
//! ```
//!
//! Indexes are assigned after filtering, so hiding completed todos renumbers
//! the open ones. Indexes are a view concern: they are recomputed on every
//! listing and never stored.
//!
//! ## Selector Grammar
//!
//! - **Index**: all digits, 1-based (`1`, `12`). `0` is invalid.
//! - **Full id**: a UUID in any form the `uuid` crate parses.
//! - **Id prefix**: at least [`MIN_PREFIX_LEN`] letters, digits, `-` or `_`,
//!   matched case-insensitively against the stored id. Must be unambiguous
//!   unless it equals an id outright. Ids written by other clients need not be
//!   UUIDs, so this is also how they are selected.
//!
//! Purely numeric input is always an index.

use crate::error::{Result, TaskmateError};
use crate::model::{TodoId, TodoList, TodoRecord};
use serde::Serialize;
use uuid::Uuid;

pub const MIN_PREFIX_LEN: usize = 4;

/// A todo paired with its position in the visible list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTodo {
    pub index: usize,
    pub todo: TodoRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSelector {
    Index(usize),
    Id(TodoId),
    Prefix(String),
}

impl std::fmt::Display for TodoSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoSelector::Index(n) => write!(f, "{}", n),
            TodoSelector::Id(id) => write!(f, "{}", id),
            TodoSelector::Prefix(p) => write!(f, "{}", p),
        }
    }
}

/// True when a todo belongs in the visible list under the given filter.
pub fn is_visible(todo: &TodoRecord, show_completed: bool) -> bool {
    show_completed || !todo.is_completed
}

/// Number the visible todos in display order.
pub fn index_todos(todos: &TodoList, show_completed: bool) -> Vec<DisplayTodo> {
    todos
        .iter()
        .filter(|t| is_visible(t, show_completed))
        .enumerate()
        .map(|(i, todo)| DisplayTodo {
            index: i + 1,
            todo: todo.clone(),
        })
        .collect()
}

pub fn parse_selector(input: &str) -> Result<TodoSelector> {
    let s = input.trim();
    if s.is_empty() {
        return Err(TaskmateError::InvalidSelector("empty selector".into()));
    }

    if s.chars().all(|c| c.is_ascii_digit()) {
        return match s.parse::<usize>() {
            Ok(0) => Err(TaskmateError::InvalidSelector(
                "indexes start at 1".into(),
            )),
            Ok(n) => Ok(TodoSelector::Index(n)),
            Err(_) => Err(TaskmateError::InvalidSelector(s.to_string())),
        };
    }

    if let Ok(uuid) = Uuid::parse_str(s) {
        return Ok(TodoSelector::Id(TodoId::from(uuid.hyphenated().to_string())));
    }

    let id_like = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if id_like && s.chars().count() >= MIN_PREFIX_LEN {
        return Ok(TodoSelector::Prefix(s.to_ascii_lowercase()));
    }

    Err(TaskmateError::InvalidSelector(s.to_string()))
}
