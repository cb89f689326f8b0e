use super::mem_backend::MemBackend;
use super::slot_store::SlotStore;

pub type InMemoryStore = SlotStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        SlotStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::TodoRecord;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        todos: Vec<TodoRecord>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                todos: Vec::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.todos.push(TodoRecord::new(format!("Test todo {}", i + 1)));
            }
            self.persist()
        }

        pub fn with_open_todo(mut self, text: &str) -> Self {
            self.todos.push(TodoRecord::new(text));
            self.persist()
        }

        pub fn with_completed_todo(mut self, text: &str) -> Self {
            let mut todo = TodoRecord::new(text);
            todo.is_completed = true;
            self.todos.push(todo);
            self.persist()
        }

        fn persist(mut self) -> Self {
            self.store.save(&self.todos).unwrap();
            self
        }
    }
}
