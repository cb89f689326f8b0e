//! Turns command results into terminal text.
//!
//! Every function returns a `String` and takes an explicit `color` flag so the
//! output can be asserted on in tests. Layout math (widths, truncation,
//! padding) uses display width, not byte length, so wide characters line up.

use super::styles;
use taskmateapp::commands::{CmdMessage, ListSummary, MessageLevel};
use taskmateapp::config::TaskmateConfig;
use taskmateapp::index::DisplayTodo;
use taskmateapp::model::TodoRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 72;
const ID_WIDTH: usize = 8;
pub const EMPTY_MESSAGE: &str = "No todos to display";

pub fn render_todo_list(
    todos: &[DisplayTodo],
    summary: Option<&ListSummary>,
    color: bool,
) -> String {
    let mut out = String::new();

    if todos.is_empty() {
        let hidden = summary.map(|s| s.total - s.visible).unwrap_or(0);
        if hidden > 0 {
            out.push_str(&styles::paint(
                &styles::MUTED,
                &format!("All done, {} finished hidden", hidden),
                color,
            ));
        } else {
            out.push_str(EMPTY_MESSAGE);
        }
        out.push('\n');
        return out;
    }

    let idx_width = todos
        .iter()
        .map(|dt| format!("{}.", dt.index).width())
        .max()
        .unwrap_or(2);

    for dt in todos {
        let idx_str = format!("{:>width$}", format!("{}.", dt.index), width = idx_width);
        let check = if dt.todo.is_completed { "[x]" } else { "[ ]" };

        let fixed = idx_width + 1 + check.width() + 1 + 2 + ID_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let text = truncate_to_width(&dt.todo.text, available);
        let padding = available.saturating_sub(text.width());

        let (check_style, text_style) = if dt.todo.is_completed {
            (&*styles::CHECK, &*styles::DONE)
        } else {
            (&*styles::MUTED, &*styles::OPEN)
        };

        out.push_str(&format!(
            "{} {} {}{}  {}\n",
            styles::paint(&styles::INDEX, &idx_str, color),
            styles::paint(check_style, check, color),
            styles::paint(text_style, &text, color),
            " ".repeat(padding),
            styles::paint(&styles::MUTED, &dt.todo.id.short(), color),
        ));
    }

    if let Some(summary) = summary {
        let mut line = format!("{}/{} finished", summary.completed, summary.total);
        if !summary.show_completed && summary.completed > 0 {
            line.push_str(", finished hidden");
        }
        out.push_str(&styles::paint(&styles::MUTED, &line, color));
        out.push('\n');
    }

    out
}

/// The list as JSON, in the same shape the durable slot uses.
pub fn render_todo_json(todos: &[DisplayTodo]) -> serde_json::Result<String> {
    let records: Vec<&TodoRecord> = todos.iter().map(|dt| &dt.todo).collect();
    serde_json::to_string_pretty(&records)
}

pub fn render_messages(messages: &[CmdMessage], color: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
            MessageLevel::Error => &*styles::ERROR,
        };
        out.push_str(&styles::paint(style, &message.content, color));
        out.push('\n');
    }
    out
}

/// The pending-input line of the interactive view.
pub fn render_input_line(input: &str, color: bool) -> String {
    if input.is_empty() {
        return String::new();
    }
    let hint = if taskmateapp::model::is_acceptable_text(input) {
        "(save to add)"
    } else {
        "(too short to save)"
    };
    format!(
        "{} {} {}\n",
        styles::paint(&styles::TITLE, "Input:", color),
        styles::paint(&styles::INPUT, input, color),
        styles::paint(&styles::MUTED, hint, color)
    )
}

pub fn render_config(config: &TaskmateConfig, data_dir: &str, config_file: &str) -> String {
    format!(
        "data_dir = {}\nstorage_key = {}\nshow_completed = {}\nconfig_file = {}\n",
        data_dir, config.storage_key, config.show_completed, config_file
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
