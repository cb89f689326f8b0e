//! # Taskmate CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination. All state and
//! logic live in the `taskmateapp` library.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/taskmate/src/cli/)                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Interactive session (repl.rs)                            │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/taskmateapp/src/api.rs)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Ways In
//!
//! - **One-shot commands** (`taskmate add …`, `taskmate done 2`): load, run one
//!   operation, save, print, exit.
//! - **Interactive session** (`taskmate shell`): the single todo view, with a
//!   pending-input line, the show/hide finished toggle, and every operation
//!   available until `quit`.
//!
//! ## Testing Approach
//!
//! - Rendering is tested with canned `CmdResult`s and colors off.
//! - The interactive session is driven through in-memory readers and writers.
//! - `tests/` runs the real binary with `assert_cmd`, isolated by `TASKMATE_DATA_DIR`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
