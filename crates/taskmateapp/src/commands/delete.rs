use crate::commands::helpers::commit;
use crate::commands::{AppState, CmdMessage, CmdResult};
use crate::error::{Result, TaskmateError};
use crate::model::TodoId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, state: &mut AppState, id: &TodoId) -> Result<CmdResult> {
    let todo = commit(store, state, |state| {
        state
            .todos
            .remove(id)
            .ok_or_else(|| TaskmateError::TodoNotFound(id.clone()))
    })?;
    log::info!("deleted todo {}", todo.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Todo deleted: {}", todo.text)));
    result.affected_todos.push(todo);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoList;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::DataStore;

    #[test]
    fn removes_only_the_target() {
        let fixture = StoreFixture::new().with_todos(3);
        let mut store = fixture.store;
        let mut state = AppState::new(TodoList::from_records(store.load().unwrap()));
        let target = state.todos.as_slice()[1].id.clone();

        run(&mut store, &mut state, &target).unwrap();

        let texts: Vec<_> = state.todos.iter().map(|t| t.text.clone()).collect();
        assert_eq!(texts, vec!["Test todo 1", "Test todo 3"]);
        assert_eq!(store.load().unwrap(), state.todos.as_slice());
    }

    #[test]
    fn empty_list_is_unchanged() {
        let mut store = InMemoryStore::new();
        let mut state = AppState::default();

        let err = run(&mut store, &mut state, &TodoId::new()).unwrap_err();
        assert!(err.is_not_found());
        assert!(state.todos.is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn absent_id_leaves_list_unchanged() {
        let fixture = StoreFixture::new().with_todos(2);
        let mut store = fixture.store;
        let mut state = AppState::new(TodoList::from_records(store.load().unwrap()));
        let before = state.clone();
        let writes = store.backend().write_count();

        assert!(run(&mut store, &mut state, &TodoId::new()).is_err());
        assert_eq!(state, before);
        assert_eq!(store.backend().write_count(), writes);
    }
}
