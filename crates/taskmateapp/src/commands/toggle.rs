use crate::commands::helpers::commit;
use crate::commands::{AppState, CmdMessage, CmdResult};
use crate::error::{Result, TaskmateError};
use crate::model::TodoId;
use crate::store::DataStore;

/// Flip a todo between open and completed, in place.
pub fn run<S: DataStore>(store: &mut S, state: &mut AppState, id: &TodoId) -> Result<CmdResult> {
    let todo = commit(store, state, |state| {
        let todo = state
            .todos
            .get_mut(id)
            .ok_or_else(|| TaskmateError::TodoNotFound(id.clone()))?;
        todo.is_completed = !todo.is_completed;
        Ok(todo.clone())
    })?;
    log::info!("todo {} completed={}", todo.id, todo.is_completed);

    let mut result = CmdResult::default();
    let verb = if todo.is_completed { "Completed" } else { "Reopened" };
    result.add_message(CmdMessage::success(format!("{}: {}", verb, todo.text)));
    result.affected_todos.push(todo);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;
    use crate::store::DataStore;

    #[test]
    fn add_then_toggle_completes_exactly_one() {
        let mut store = InMemoryStore::new();
        let mut state = AppState::default();
        add::run(&mut store, &mut state, "other".into()).unwrap();
        let added = add::run(&mut store, &mut state, "hello".into()).unwrap();

        run(&mut store, &mut state, &added.affected_todos[0].id).unwrap();

        let completed: Vec<_> = state.todos.iter().filter(|t| t.is_completed).collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "hello");
        assert_eq!(store.load().unwrap(), state.todos.as_slice());
    }

    #[test]
    fn toggling_twice_reopens() {
        let mut store = InMemoryStore::new();
        let mut state = AppState::default();
        let id = add::run(&mut store, &mut state, "twice".into())
            .unwrap()
            .affected_todos[0]
            .id
            .clone();

        run(&mut store, &mut state, &id).unwrap();
        let result = run(&mut store, &mut state, &id).unwrap();

        assert!(!result.affected_todos[0].is_completed);
        assert!(result.messages[0].content.starts_with("Reopened"));
    }

    #[test]
    fn keeps_position() {
        let mut store = InMemoryStore::new();
        let mut state = AppState::default();
        for text in ["one!", "two!", "three"] {
            add::run(&mut store, &mut state, text.into()).unwrap();
        }
        let middle = state.todos.as_slice()[1].id.clone();

        run(&mut store, &mut state, &middle).unwrap();
        assert_eq!(state.todos.position(&middle), Some(1));
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut store = InMemoryStore::new();
        let mut state = AppState::default();
        let err = run(&mut store, &mut state, &TodoId::new()).unwrap_err();
        assert!(err.is_not_found());
    }
}
