//! # Data Model
//!
//! A todo is three fields: an id, its text, and a completion flag. The whole
//! application state on disk is an ordered list of them.
//!
//! ## Persisted Shape
//!
//! Records serialize with the field names the durable slot has always used:
//!
//! ```text
//! [{"id": "5d0c…", "todo": "buy milk", "isCompleted": false}, ...]
//! ```
//!
//! Note the text lives under `todo`, not `text`. [`TodoList`] serializes as a
//! bare JSON array so the slot content is exactly the list.
//!
//! ## Identity
//!
//! [`TodoId`] is an opaque string, a fresh v4 UUID for todos created here. It
//! is assigned once in [`TodoRecord::new`] and never changes. Editing does not preserve identity: an edit removes the
//! record and the resubmitted text becomes a new record with a fresh id.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Minimum number of characters a todo needs to be accepted (exclusive bound).
pub const MIN_TODO_CHARS: usize = 3;

/// Opaque todo identifier.
///
/// New ids are v4 UUID strings, but any string read back from the slot is
/// accepted as-is, so lists written by other clients keep their ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, enough to tell todos apart on screen.
    pub fn short(&self) -> String {
        self.0.chars().take(8).collect()
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    #[serde(rename = "todo")]
    pub text: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl TodoRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            text: text.into(),
            is_completed: false,
        }
    }
}

/// Whether `text` passes the add gate (more than [`MIN_TODO_CHARS`] characters).
pub fn is_acceptable_text(text: &str) -> bool {
    text.chars().count() > MIN_TODO_CHARS
}

/// Ordered, id-unique sequence of todos. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoRecord>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from loaded records, dropping later duplicates of an id.
    pub fn from_records(records: Vec<TodoRecord>) -> Self {
        let mut list = Self::new();
        for record in records {
            if list.contains(&record.id) {
                log::warn!("dropping duplicate todo id {}", record.id);
                continue;
            }
            list.items.push(record);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoRecord> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[TodoRecord] {
        &self.items
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.items.iter().position(|t| &t.id == id)
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoRecord> {
        self.items.iter().find(|t| &t.id == id)
    }

    pub fn get_mut(&mut self, id: &TodoId) -> Option<&mut TodoRecord> {
        self.items.iter_mut().find(|t| &t.id == id)
    }

    /// Appends a record. Returns `false` (and leaves the list alone) if the id
    /// is already present.
    pub fn push(&mut self, record: TodoRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.items.push(record);
        true
    }

    pub fn remove(&mut self, id: &TodoId) -> Option<TodoRecord> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.is_completed).count()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoRecord;
    type IntoIter = std::slice::Iter<'a, TodoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
