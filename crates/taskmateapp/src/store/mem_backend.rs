use super::backend::StorageBackend;
use crate::error::{Result, TaskmateError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since taskmate is single-threaded.
/// This lets the `StorageBackend` trait use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, Vec<u8>>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Seed a slot with raw content, bypassing encoding (for malformed-data tests).
    pub fn put_raw(&self, key: &str, value: impl AsRef<[u8]>) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.as_ref().to_vec());
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(TaskmateError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}
