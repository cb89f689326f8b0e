use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw keyed slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while SlotStore handles the "what" (encoding the todo list, tolerating bad content).
pub trait StorageBackend {
    /// Read the raw bytes held in `key`. Content is not checked for encoding.
    /// Returns Ok(None) when nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the content of `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove `key`. Removing an absent slot is not an error.
    fn remove_slot(&self, key: &str) -> Result<()>;

    /// Where the slot lives. For FsBackend this is the real file,
    /// for MemBackend a virtual path.
    fn slot_path(&self, key: &str) -> PathBuf;
}
