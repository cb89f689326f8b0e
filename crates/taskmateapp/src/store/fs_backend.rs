use super::backend::StorageBackend;
use crate::error::{Result, TaskmateError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: each slot is `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn slot_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TaskmateError::Store(format!(
                "Invalid storage key '{}' (use letters, digits, '-' or '_')",
                key
            )));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TaskmateError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.slot_file(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read(&path).map_err(TaskmateError::Io)?;
        log::debug!("read {} bytes from {}", content.len(), path.display());
        Ok(Some(content))
    }

    fn write_slot(&self, key: &str, value: &[u8]) -> Result<()> {
        let target = self.slot_file(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(TaskmateError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(TaskmateError::Io(e));
        }
        log::debug!("wrote {} bytes to {}", value.len(), target.display());
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<()> {
        let path = self.slot_file(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(TaskmateError::Io)?;
        }
        Ok(())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}
