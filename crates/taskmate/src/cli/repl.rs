//! The interactive todo view.
//!
//! One screen: the list, the pending-input line, a prompt. Each line the user
//! types is one action. After every action the messages, the list and the
//! input line are printed again. Errors are shown and the session carries on;
//! only `quit` or end of input leaves.

use super::render;
use anyhow::Result;
use std::io::{BufRead, Write};
use taskmateapp::api::TaskmateApi;
use taskmateapp::commands::{CmdMessage, CmdResult};
use taskmateapp::error::TaskmateError;
use taskmateapp::store::DataStore;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  add <text>      add a todo straight away (alias: a)
  input <text>    put text in the input line
  save            add the input line as a todo
  edit <n>        move a todo back into the input line (alias: e)
  done <n>        mark finished or unfinished (alias: x, toggle)
  rm <n>          delete a todo (alias: delete, del)
  show | hide     show or hide finished todos
  list            show the list again (alias: ls)
  help            this text (alias: ?)
  quit            leave (alias: q, exit)
<n> is a number from the list or an id prefix.
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Help,
    Quit,
    List,
    Add(String),
    Input(String),
    Submit,
    Edit(String),
    Toggle(String),
    Delete(String),
    Filter(bool),
}

fn parse_line(line: &str) -> std::result::Result<Option<ReplCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let needs_arg = |what: &str| -> std::result::Result<String, String> {
        if rest.is_empty() {
            Err(format!("'{}' needs {}", word, what))
        } else {
            Ok(rest.to_string())
        }
    };

    let cmd = match word.to_lowercase().as_str() {
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        "list" | "ls" => ReplCommand::List,
        "add" | "a" => ReplCommand::Add(needs_arg("some text")?),
        "input" => ReplCommand::Input(rest.to_string()),
        "save" | "submit" => ReplCommand::Submit,
        "edit" | "e" => ReplCommand::Edit(needs_arg("a todo number")?),
        "done" | "toggle" | "x" => ReplCommand::Toggle(needs_arg("a todo number")?),
        "rm" | "delete" | "del" => ReplCommand::Delete(needs_arg("a todo number")?),
        "show" => ReplCommand::Filter(true),
        "hide" => ReplCommand::Filter(false),
        other => return Err(format!("Unknown command '{}', try 'help'", other)),
    };
    Ok(Some(cmd))
}

/// Run the interactive view until `quit` or end of input.
pub fn run_session<S, R, W>(
    api: &mut TaskmateApi<S>,
    input: R,
    out: &mut W,
    color: bool,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    show_view(api, out, color)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ReplCommand::Quit)) => break,
            Ok(Some(ReplCommand::Help)) => write!(out, "{}", HELP)?,
            Ok(Some(ReplCommand::List)) => show_view(api, out, color)?,
            Ok(Some(cmd)) => {
                let shown = match apply(api, cmd) {
                    Ok(result) => render::render_messages(&result.messages, color),
                    Err(e) => render_error(&e, color),
                };
                write!(out, "{}", shown)?;
                show_view(api, out, color)?;
            }
            Err(msg) => write!(
                out,
                "{}",
                render::render_messages(&[CmdMessage::error(msg)], color)
            )?,
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn apply<S: DataStore>(
    api: &mut TaskmateApi<S>,
    cmd: ReplCommand,
) -> taskmateapp::error::Result<CmdResult> {
    match cmd {
        ReplCommand::Add(text) => api.add_todo(text),
        ReplCommand::Input(text) => Ok(api.set_input(text)),
        ReplCommand::Submit => api.submit(),
        ReplCommand::Edit(sel) => api.begin_edit(&sel),
        ReplCommand::Toggle(sel) => api.toggle_todo(&sel),
        ReplCommand::Delete(sel) => api.delete_todo(&sel),
        ReplCommand::Filter(show) => Ok(api.set_filter(show)),
        ReplCommand::Help | ReplCommand::Quit | ReplCommand::List => Ok(CmdResult::default()),
    }
}

fn render_error(err: &TaskmateError, color: bool) -> String {
    let message = if err.is_not_found() {
        CmdMessage::warning(format!("{}, list refreshed", err))
    } else {
        CmdMessage::error(err.to_string())
    };
    render::render_messages(&[message], color)
}

fn show_view<S, W>(api: &TaskmateApi<S>, out: &mut W, color: bool) -> Result<()>
where
    S: DataStore,
    W: Write,
{
    let result = api.list();
    write!(
        out,
        "{}{}",
        render::render_todo_list(&result.listed_todos, result.summary.as_ref(), color),
        render::render_input_line(api.pending_input(), color)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use taskmateapp::store::memory::InMemoryStore;

    fn session(script: &str) -> (TaskmateApi<InMemoryStore>, String) {
        let mut api = TaskmateApi::new(InMemoryStore::new()).unwrap();
        let mut out = Vec::new();
        run_session(&mut api, Cursor::new(script.to_string()), &mut out, false).unwrap();
        (api, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_keywords_and_aliases() {
        assert_eq!(parse_line("  "), Ok(None));
        assert_eq!(parse_line("q"), Ok(Some(ReplCommand::Quit)));
        assert_eq!(
            parse_line("a buy  milk"),
            Ok(Some(ReplCommand::Add("buy  milk".into())))
        );
        assert_eq!(parse_line("x 2"), Ok(Some(ReplCommand::Toggle("2".into()))));
        assert_eq!(parse_line("HIDE"), Ok(Some(ReplCommand::Filter(false))));
        assert_eq!(parse_line("input"), Ok(Some(ReplCommand::Input(String::new()))));
        assert!(parse_line("rm").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn starts_with_empty_view() {
        let (_, out) = session("quit\n");
        assert!(out.starts_with("No todos to display\n> "));
    }

    #[test]
    fn add_toggle_delete() {
        let (api, out) = session("add buy milk\nadd walk the dog\ndone 1\nrm 2\n");
        assert!(out.contains("Todo added: buy milk"));
        assert!(out.contains("Completed: buy milk"));
        assert!(out.contains("Todo deleted: walk the dog"));
        assert_eq!(api.todos().len(), 1);
        assert!(api.todos().as_slice()[0].is_completed);
    }

    #[test]
    fn short_text_is_reported_and_session_continues() {
        let (api, out) = session("add abc\nadd abcd\n");
        assert!(out.contains("too short"));
        assert_eq!(api.todos().len(), 1);
    }

    #[test]
    fn edit_moves_todo_into_input_and_save_re_adds() {
        let (api, out) = session("add write report\nedit 1\n");
        assert!(api.todos().is_empty());
        assert_eq!(api.pending_input(), "write report");
        assert!(out.contains("Input: write report (save to add)"));

        let (api, _) = session("add write report\nedit 1\ninput write the report\nsave\n");
        assert_eq!(api.todos().len(), 1);
        assert_eq!(api.todos().as_slice()[0].text, "write the report");
        assert_eq!(api.pending_input(), "");
    }

    #[test]
    fn hide_and_show_finished() {
        let (api, out) = session("add first todo\ndone 1\nhide\n");
        assert!(!api.show_completed());
        assert!(out.contains("All done, 1 finished hidden"));

        let (api, _) = session("add first todo\ndone 1\nhide\nshow\n");
        assert!(api.show_completed());
    }

    #[test]
    fn missing_id_is_a_warning() {
        let id = taskmateapp::model::TodoId::new();
        let (_, out) = session(&format!("rm {}\n", id));
        assert!(out.contains("Todo not found"));
        assert!(out.contains("list refreshed"));
    }

    #[test]
    fn unknown_command_keeps_going() {
        let (api, out) = session("dance\nadd after the error\n");
        assert!(out.contains("Unknown command 'dance'"));
        assert_eq!(api.todos().len(), 1);
    }

    #[test]
    fn quit_stops_reading() {
        let (api, _) = session("quit\nadd never added\n");
        assert!(api.todos().is_empty());
    }
}
