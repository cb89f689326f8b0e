use crate::commands::{AppState, CmdResult};

/// Replace the pending input. Nothing is persisted.
pub fn run(state: &mut AppState, text: String) -> CmdResult {
    state.input = text;
    CmdResult {
        pending_input: Some(state.input.clone()),
        ..Default::default()
    }
}
