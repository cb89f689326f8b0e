use super::AppState;
use crate::error::{Result, TaskmateError};
use crate::index::{index_todos, TodoSelector};
use crate::model::TodoId;
use crate::store::DataStore;

/// Run a mutation against `state` and persist the result.
///
/// If `mutate` fails nothing is saved. If the save fails, `state` is restored
/// to what it was before the call.
pub fn commit<S, T, F>(store: &mut S, state: &mut AppState, mutate: F) -> Result<T>
where
    S: DataStore,
    F: FnOnce(&mut AppState) -> Result<T>,
{
    let snapshot = state.clone();
    let value = mutate(state)?;
    if let Err(e) = store.save(state.todos.as_slice()) {
        log::error!("failed to persist todos, rolling back: {}", e);
        *state = snapshot;
        return Err(e);
    }
    Ok(value)
}

/// Turn a selector into an id.
///
/// Indexes refer to the visible list under the current filter. Full ids are
/// matched ignoring case and otherwise returned as-is (the operation itself
/// reports a missing record). Prefixes must match exactly one stored id,
/// unless one id equals the prefix outright.
pub fn resolve_selector(state: &AppState, selector: &TodoSelector) -> Result<TodoId> {
    match selector {
        TodoSelector::Index(n) => index_todos(&state.todos, state.show_completed)
            .into_iter()
            .find(|dt| dt.index == *n)
            .map(|dt| dt.todo.id)
            .ok_or_else(|| TaskmateError::Api(format!("Index {} not found in current list", n))),
        TodoSelector::Id(id) => Ok(state
            .todos
            .iter()
            .find(|t| t.id.as_str().eq_ignore_ascii_case(id.as_str()))
            .map(|t| t.id.clone())
            .unwrap_or_else(|| id.clone())),
        TodoSelector::Prefix(prefix) => {
            if let Some(exact) = state
                .todos
                .iter()
                .find(|t| t.id.as_str().eq_ignore_ascii_case(prefix))
            {
                return Ok(exact.id.clone());
            }
            let matches: Vec<&TodoId> = state
                .todos
                .iter()
                .filter(|t| t.id.as_str().to_ascii_lowercase().starts_with(prefix.as_str()))
                .map(|t| &t.id)
                .collect();
            match matches.as_slice() {
                [id] => Ok((*id).clone()),
                [] => Err(TaskmateError::Api(format!(
                    "No todo id starts with '{}'",
                    prefix
                ))),
                _ => Err(TaskmateError::Api(format!(
                    "Id prefix '{}' matches {} todos, use more characters",
                    prefix,
                    matches.len()
                ))),
            }
        }
    }
}
