//! # Taskmate Architecture
//!
//! Taskmate is a **UI-agnostic todo-list library**. The terminal client in the
//! `taskmate` crate is one front end; nothing in here knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI (taskmate binary: one-shot commands + interactive view) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session state (list, pending input, filter)     │
//! │  - Normalizes selectors (index / id prefix → TodoId)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, begin-edit, delete, toggle-complete, filter, list   │
//! │  - Every mutation is followed by a full save                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, SlotStore over a StorageBackend         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! The list is loaded once when a [`api::TaskmateApi`] is created and lives in
//! memory for the rest of the session. Each user action runs to completion,
//! mutation and write, before the next one starts. There is no background work
//! and nothing to lock.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Persistence bridge and backends
//! - [`model`]: `TodoRecord`, `TodoId`, `TodoList`
//! - [`index`]: Display numbering, visibility filter and selectors
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
