use super::backend::StorageBackend;
use super::{DataStore, DEFAULT_STORAGE_KEY};
use crate::error::{Result, TaskmateError};
use crate::model::TodoRecord;
use std::path::PathBuf;

pub struct SlotStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
}

impl<B: StorageBackend> SlotStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Decode slot content. Anything that is not a UTF-8 JSON array of
    /// records is reported as `None`.
    fn decode(&self, raw: &[u8]) -> Option<Vec<TodoRecord>> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        match serde_json::from_slice::<Option<Vec<TodoRecord>>>(raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "ignoring malformed content in slot '{}': {}",
                    self.key,
                    e
                );
                None
            }
        }
    }
}

impl<B: StorageBackend> DataStore for SlotStore<B> {
    fn load(&self) -> Result<Vec<TodoRecord>> {
        let Some(raw) = self.backend.read_slot(&self.key)? else {
            log::debug!("slot '{}' is empty, starting fresh", self.key);
            return Ok(Vec::new());
        };
        let records = self.decode(&raw).unwrap_or_default();
        log::debug!("loaded {} todos from slot '{}'", records.len(), self.key);
        Ok(records)
    }

    fn save(&mut self, todos: &[TodoRecord]) -> Result<()> {
        let content = serde_json::to_string(todos).map_err(TaskmateError::Serialization)?;
        self.backend.write_slot(&self.key, content.as_bytes())?;
        log::debug!("saved {} todos to slot '{}'", todos.len(), self.key);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.backend.slot_path(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn load_of_untouched_slot_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let mut done = TodoRecord::new("second one");
        done.is_completed = true;
        let todos = vec![TodoRecord::new("first one"), done, TodoRecord::new("third")];

        store.save(&todos).unwrap();
        assert_eq!(store.load().unwrap(), todos);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let mut store = InMemoryStore::new();
        store.save(&[TodoRecord::new("old one")]).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_content_loads_as_empty() {
        for raw in [
            "not json",
            "{\"id\": 1}",
            "[{\"todo\": \"missing id\"}]",
            "null",
            "   ",
            "[1, 2, 3]",
        ] {
            let store = InMemoryStore::new();
            store.backend().put_raw(DEFAULT_STORAGE_KEY, raw);
            assert!(store.load().unwrap().is_empty(), "content: {raw}");
        }
    }

    #[test]
    fn invalid_utf8_loads_as_empty() {
        let store = InMemoryStore::new();
        store
            .backend()
            .put_raw(DEFAULT_STORAGE_KEY, [0xff, 0xfe, 0x00, 0x5b]);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn reads_slot_written_by_other_clients() {
        let store = InMemoryStore::new();
        store.backend().put_raw(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"todo-1","todo":"from another client","isCompleted":false},
                {"id":"8c5e4ec2-4a23-4f9a-9e86-2b7f1f5a6b10","todo":"walk the dog","isCompleted":true}]"#,
        );
        let todos = store.load().unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id.as_str(), "todo-1");
        assert_eq!(todos[1].text, "walk the dog");
    }

    #[test]
    fn custom_key_uses_separate_slot() {
        let mut store = InMemoryStore::new().with_key("work");
        store.save(&[TodoRecord::new("ship it")]).unwrap();
        assert!(store.backend().read_slot("todos").unwrap().is_none());
        assert!(store.backend().read_slot("work").unwrap().is_some());
        assert_eq!(store.location(), PathBuf::from("memory://work"));
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        let err = store.save(&[TodoRecord::new("nope nope")]).unwrap_err();
        assert!(matches!(err, TaskmateError::Store(_)));
    }
}
