use crate::commands::{list, AppState, CmdMessage, CmdResult};

/// Show or hide completed todos. Only the view changes; the list and the
/// store are untouched.
pub fn run(state: &mut AppState, show_completed: bool) -> CmdResult {
    state.show_completed = show_completed;
    let mut result = list::run(state);
    let msg = if show_completed {
        "Showing finished todos"
    } else {
        "Hiding finished todos"
    };
    result.add_message(CmdMessage::info(msg));
    result
}
