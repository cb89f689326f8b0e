//! Named styles for terminal output.
//!
//! Rendering code asks for a style by what the text *is* (an index, a finished
//! todo, a warning) and never picks colors itself. Styles are only applied when
//! the caller says color is on, so tests and pipes get plain text.

use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static OPEN: Lazy<Style> = Lazy::new(Style::new);
pub static DONE: Lazy<Style> = Lazy::new(|| Style::new().dim().strikethrough());
pub static CHECK: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static INPUT: Lazy<Style> = Lazy::new(|| Style::new().cyan());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());

/// Apply `style` to `text` when `color` is on.
pub fn paint(style: &Style, text: &str, color: bool) -> String {
    if color {
        style.clone().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}
