use crate::commands::{AppState, CmdResult, ListSummary};
use crate::index::index_todos;

/// The visible todos under the current filter, with totals.
pub fn run(state: &AppState) -> CmdResult {
    let listed = index_todos(&state.todos, state.show_completed);
    let summary = ListSummary {
        total: state.todos.len(),
        completed: state.todos.completed_count(),
        visible: listed.len(),
        show_completed: state.show_completed,
    };
    let mut result = CmdResult::default().with_listed_todos(listed);
    result.summary = Some(summary);
    result
}
