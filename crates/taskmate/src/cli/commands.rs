//! # CLI Layer
//!
//! This module is **one possible UI client** for taskmate; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, apply flag overrides, open the store
//! 3. **Dispatch**: Route each command to the API
//! 4. **Output Formatting**: Hand results to `render`
//!
//! Errors are returned to `main`, which prints them and exits non-zero.

use super::render;
use super::repl;
use super::setup::{build_command, Cli, Commands, ConfigAction, ListArgs, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io::{self, Write};
use taskmateapp::api::TaskmateApi;
use taskmateapp::commands::CmdResult;
use taskmateapp::config::{config_file_path, TaskmateConfig};
use taskmateapp::store::fs::FileStore;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Neither of these needs a store.
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = build_command();
            clap_complete::generate(*shell, &mut cmd, "taskmate", &mut io::stdout());
            return Ok(());
        }
        Some(Commands::Config {
            action: Some(ConfigAction::Gen),
        }) => {
            print!("{}", TaskmateConfig::template());
            return Ok(());
        }
        _ => {}
    }

    let mut config = TaskmateConfig::load()?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    log::debug!("resolved config: {:?}", config);

    if let Some(Commands::Config { action: None }) = &cli.command {
        return handle_config(&config);
    }

    let mut api = TaskmateApi::new(config.open_store()?)
        .context("Could not open the todo list")?
        .with_show_completed(config.show_completed);
    let color = console::colors_enabled();

    match cli.command {
        None => handle_list(&mut api, &ListArgs::default(), color),
        Some(Commands::List(args)) => handle_list(&mut api, &args, color),
        Some(Commands::Add { text }) => {
            let result = api.add_todo(text.join(" "))?;
            print_messages(&result, color);
            Ok(())
        }
        Some(Commands::Done { selector }) => {
            let result = api.toggle_todo(&selector)?;
            print_messages(&result, color);
            Ok(())
        }
        Some(Commands::Delete { selector }) => {
            let result = api.delete_todo(&selector)?;
            print_messages(&result, color);
            Ok(())
        }
        Some(Commands::Edit { selector, text }) => {
            let result = api.replace_todo(&selector, text.join(" "))?;
            print_messages(&result, color);
            Ok(())
        }
        Some(Commands::Shell) => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::run_session(&mut api, stdin.lock(), &mut stdout, color)
        }
        Some(Commands::Path) => {
            println!("{}", api.location().display());
            Ok(())
        }
        Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) => Ok(()),
    }
}

/// `-v` is info, `-vv` and up is debug. `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn handle_list(api: &mut TaskmateApi<FileStore>, args: &ListArgs, color: bool) -> Result<()> {
    let result = match args.filter() {
        Some(show_completed) => api.set_filter(show_completed),
        None => api.list(),
    };

    let out = match args.output {
        OutputFormat::Text => {
            render::render_todo_list(&result.listed_todos, result.summary.as_ref(), color)
        }
        OutputFormat::Json => {
            let mut json = render::render_todo_json(&result.listed_todos)?;
            json.push('\n');
            json
        }
    };
    write_stdout(&out)
}

fn handle_config(config: &TaskmateConfig) -> Result<()> {
    let data_dir = config.data_dir()?;
    let config_file = config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    write_stdout(&render::render_config(
        config,
        &data_dir.display().to_string(),
        &config_file,
    ))
}

fn print_messages(result: &CmdResult, color: bool) {
    print!("{}", render::render_messages(&result.messages, color));
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
