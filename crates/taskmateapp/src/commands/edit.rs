use crate::commands::helpers::commit;
use crate::commands::{AppState, CmdMessage, CmdResult};
use crate::error::{Result, TaskmateError};
use crate::model::{is_acceptable_text, TodoId, TodoRecord};
use crate::store::DataStore;

/// Begin editing a todo: its text moves into the pending input and the todo
/// itself is removed. Submitting the input creates a new todo with a new id.
pub fn run<S: DataStore>(store: &mut S, state: &mut AppState, id: &TodoId) -> Result<CmdResult> {
    let todo = commit(store, state, |state| {
        let todo = state
            .todos
            .remove(id)
            .ok_or_else(|| TaskmateError::TodoNotFound(id.clone()))?;
        state.input = todo.text.clone();
        Ok(todo)
    })?;
    log::info!("editing todo {}", todo.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Editing: {}", todo.text)));
    result.pending_input = Some(todo.text.clone());
    result.affected_todos.push(todo);
    Ok(result)
}

/// Edit and resubmit in one step: the todo is replaced by a new one holding
/// `text`, at the end of the list. Both changes are saved together, so a
/// failed save leaves the original in place. The pending input is untouched.
pub fn replace<S: DataStore>(
    store: &mut S,
    state: &mut AppState,
    id: &TodoId,
    text: String,
) -> Result<CmdResult> {
    if !is_acceptable_text(&text) {
        return Err(TaskmateError::TooShort {
            len: text.chars().count(),
        });
    }

    let (old, new) = commit(store, state, |state| {
        let old = state
            .todos
            .remove(id)
            .ok_or_else(|| TaskmateError::TodoNotFound(id.clone()))?;
        let new = TodoRecord::new(text);
        state.todos.push(new.clone());
        Ok((old, new))
    })?;
    log::info!("replaced todo {} with {}", old.id, new.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Todo updated: {} -> {}",
        old.text, new.text
    )));
    Ok(result.with_affected_todos(vec![old, new]))
}
