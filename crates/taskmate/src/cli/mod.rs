mod commands;
mod render;
mod repl;
mod setup;
mod styles;

pub use commands::run;
