use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "taskmate",
    bin_name = "taskmate",
    version,
    disable_help_subcommand = true,
    after_help = "Todos are referenced by their number in the list (e.g. 2) or by id prefix (e.g. 8c5e)."
)]
#[command(about = "Manage your todos in one place", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Directory holding the todo list (overrides TASKMATE_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,
}

/// Builds the clap Command, used for completions.
pub fn build_command() -> clap::Command {
    Cli::command()
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo (needs more than 3 characters)
    #[command(alias = "a")]
    Add {
        /// Todo text; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List todos
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark a todo finished, or unfinished again
    #[command(alias = "toggle")]
    Done {
        /// Number in the list or id prefix
        selector: String,
    },

    /// Replace a todo's text (the todo is recreated with a new id)
    #[command(alias = "e")]
    Edit {
        /// Number in the list or id prefix
        selector: String,

        /// New text; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// Number in the list or id prefix
        selector: String,
    },

    /// Open the interactive todo view
    #[command(alias = "i")]
    Shell,

    /// Print where todos are stored
    Path,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print a commented sample taskmate.toml
    Gen,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Hide finished todos
    #[arg(long, conflicts_with = "show_completed")]
    pub hide_completed: bool,

    /// Show finished todos
    #[arg(long)]
    pub show_completed: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl ListArgs {
    /// The filter requested on the command line, if any.
    pub fn filter(&self) -> Option<bool> {
        if self.hide_completed {
            Some(false)
        } else if self.show_completed {
            Some(true)
        } else {
            None
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("taskmate").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_args_has_no_command() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_joins_words() {
        match parse(&["add", "buy", "some", "milk"]).command {
            Some(Commands::Add { text }) => assert_eq!(text.join(" "), "buy some milk"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn aliases() {
        assert!(matches!(parse(&["rm", "1"]).command, Some(Commands::Delete { .. })));
        assert!(matches!(parse(&["toggle", "1"]).command, Some(Commands::Done { .. })));
        assert!(matches!(parse(&["ls"]).command, Some(Commands::List(_))));
        assert!(matches!(parse(&["i"]).command, Some(Commands::Shell)));
    }

    #[test]
    fn list_filter_flags() {
        match parse(&["list", "--hide-completed"]).command {
            Some(Commands::List(args)) => assert_eq!(args.filter(), Some(false)),
            other => panic!("unexpected {:?}", other),
        }
        match parse(&["list", "--output", "json"]).command {
            Some(Commands::List(args)) => {
                assert_eq!(args.filter(), None);
                assert_eq!(args.output, OutputFormat::Json);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(Cli::try_parse_from([
            "taskmate",
            "list",
            "--hide-completed",
            "--show-completed"
        ])
        .is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list", "-vv", "--data-dir", "/tmp/x"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn edit_requires_text() {
        assert!(Cli::try_parse_from(["taskmate", "edit", "1"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        build_command().debug_assert();
    }
}
