use crate::commands::helpers::commit;
use crate::commands::{AppState, CmdMessage, CmdResult};
use crate::error::{Result, TaskmateError};
use crate::model::{is_acceptable_text, TodoRecord};
use crate::store::DataStore;

/// Append a new open todo with `text` and clear the pending input.
///
/// Text of three characters or fewer is rejected with `TooShort` and the
/// list is left untouched.
pub fn run<S: DataStore>(store: &mut S, state: &mut AppState, text: String) -> Result<CmdResult> {
    if !is_acceptable_text(&text) {
        return Err(TaskmateError::TooShort {
            len: text.chars().count(),
        });
    }

    let todo = commit(store, state, |state| {
        let todo = TodoRecord::new(text);
        if !state.todos.push(todo.clone()) {
            return Err(TaskmateError::Store(format!("Duplicate todo id {}", todo.id)));
        }
        state.input.clear();
        Ok(todo)
    })?;
    log::info!("added todo {}", todo.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Todo added: {}", todo.text)));
    result.pending_input = Some(String::new());
    result.affected_todos.push(todo);
    Ok(result)
}

/// Add whatever is in the pending input (the form's save button).
pub fn submit<S: DataStore>(store: &mut S, state: &mut AppState) -> Result<CmdResult> {
    let text = state.input.clone();
    run(store, state, text)
}
