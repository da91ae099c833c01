//! Output formatting for the interactive session.
//!
//! Layout math (truncation, widths) stays Unicode-aware via `unicode-width`;
//! styling goes through `colored`, which already no-ops when stdout is not a
//! terminal. The heading is the accessibility anchor of the original UI, so
//! the focus signal renders as an underlined heading here.

use colored::Colorize;
use taskz::view::{FocusSignal, View};
use unicode_width::UnicodeWidthChar;

const LINE_WIDTH: usize = 72;
const DONE_MARKER: &str = "[x]";
const OPEN_MARKER: &str = "[ ]";

/// Render one frame: selector row, visible tasks, count heading.
pub(super) fn print_view(view: &View) {
    println!("{}", selector_row(view));

    if view.tasks.is_empty() {
        println!("  {}", "Nothing to show.".dimmed());
    } else {
        for (i, task) in view.tasks.iter().enumerate() {
            let marker = if task.completed {
                DONE_MARKER.green()
            } else {
                OPEN_MARKER.normal()
            };
            let name = truncate_to_width(&task.name, LINE_WIDTH);
            let name = if task.completed {
                name.dimmed().strikethrough()
            } else {
                name.normal()
            };
            println!("  {:>2}. {} {}", i + 1, marker, name);
        }
    }

    let heading = if view.focus == Some(FocusSignal::Heading) {
        view.summary.bold().underline()
    } else {
        view.summary.bold()
    };
    println!("{}", heading);
    println!();
}

fn selector_row(view: &View) -> String {
    let mut row = String::new();
    for selector in view.selectors {
        if !row.is_empty() {
            row.push_str("  ");
        }
        if *selector == view.filter {
            row.push_str(&format!("[{}]", selector).yellow().bold().to_string());
        } else {
            row.push_str(&format!(" {} ", selector));
        }
    }
    row
}

pub(super) fn print_text(text: &str) {
    println!("{}", text);
}

pub(super) fn warning(msg: &str) {
    eprintln!("{}", msg.yellow());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
