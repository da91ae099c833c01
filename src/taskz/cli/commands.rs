//! The intent loop.
//!
//! One session per process: seed from flags, render the first frame, then
//! read one intent per stdin line until EOF or `quit`. Position arguments are
//! resolved against the **last rendered view** — the numbers the user is
//! currently looking at — before the session ever sees them.

use once_cell::sync::Lazy;
use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use taskz::api::TaskSession;
use taskz::error::Result;
use taskz::filter::Filter;
use taskz::id::IdGenerator;
use taskz::model::demo_tasks;
use taskz::view::View;

use super::render;
use super::setup::Cli;

static HELP: Lazy<String> = Lazy::new(|| {
    let mut out = String::new();
    out.push_str("Intents (one per line):\n");
    for (usage, about) in [
        ("add NAME", "Append a task (empty names are legal)"),
        ("toggle N", "Flip completion on the task at position N"),
        ("rename N NAME", "Rename the task at position N"),
        ("delete N", "Delete the task at position N"),
        ("filter SELECTOR", "Switch to all, active or completed"),
        ("filters", "Show the selector set"),
        ("list", "Re-render the current view"),
        ("help", "Show this text"),
        ("quit", "End the session"),
    ] {
        out.push_str(&format!("  {:<16} {}\n", usage, about));
    }
    out.push_str("N is the position shown in the current list.");
    out
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Intent {
    List,
    Add(String),
    Toggle(usize),
    Rename(usize, String),
    Delete(usize),
    SetFilter(Filter),
    Filters,
    Help,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let seed = if cli.demo { demo_tasks() } else { Vec::new() };
    let mut session: TaskSession = TaskSession::with_tasks(seed);
    if let Some(filter) = cli.filter {
        session.set_filter(filter);
    }
    for name in &cli.tasks {
        session.add(name.clone());
    }

    let mut view = session.refresh();
    emit(&view, cli.json)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && !cli.json;
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let intent = match parse_intent(line) {
            Ok(intent) => intent,
            Err(msg) => {
                render::warning(&msg);
                continue;
            }
        };

        match intent {
            Intent::Quit => break,
            Intent::Help => render::print_text(&HELP),
            Intent::Filters => render::print_text(&selector_names(&session)),
            Intent::List => {
                view = session.refresh();
                emit(&view, cli.json)?;
            }
            Intent::Add(name) => {
                view = session.add(name);
                emit(&view, cli.json)?;
            }
            Intent::SetFilter(filter) => {
                view = session.set_filter(filter);
                emit(&view, cli.json)?;
            }
            Intent::Toggle(pos) => match resolved_id(&view, pos) {
                Some(id) => {
                    view = session.toggle(&id);
                    emit(&view, cli.json)?;
                }
                None => render::warning(&no_task_at(pos)),
            },
            Intent::Delete(pos) => match resolved_id(&view, pos) {
                Some(id) => {
                    view = session.delete(&id);
                    emit(&view, cli.json)?;
                }
                None => render::warning(&no_task_at(pos)),
            },
            Intent::Rename(pos, name) => match resolved_id(&view, pos) {
                Some(id) => {
                    view = session.rename(&id, name);
                    emit(&view, cli.json)?;
                }
                None => render::warning(&no_task_at(pos)),
            },
        }
    }

    Ok(())
}

fn emit(view: &View, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(view)?);
    } else {
        render::print_view(view);
    }
    Ok(())
}

/// Map a 1-based position in the last rendered view to the task's id.
fn resolved_id(view: &View, pos: usize) -> Option<String> {
    view.tasks.get(pos - 1).map(|task| task.id.clone())
}

fn no_task_at(pos: usize) -> String {
    format!("No task at position {}", pos)
}

fn selector_names<G: IdGenerator>(session: &TaskSession<G>) -> String {
    Filter::SELECTORS
        .iter()
        .map(|selector| {
            if *selector == session.filter() {
                format!("[{}]", selector)
            } else {
                selector.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn parse_intent(line: &str) -> std::result::Result<Intent, String> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or("").to_ascii_lowercase();
    let rest = parts.next().unwrap_or("").trim();

    match word.as_str() {
        "list" | "ls" => Ok(Intent::List),
        "filters" => Ok(Intent::Filters),
        "help" | "?" => Ok(Intent::Help),
        "quit" | "exit" | "q" => Ok(Intent::Quit),
        "add" => Ok(Intent::Add(rest.to_string())),
        "toggle" => Ok(Intent::Toggle(parse_position(rest)?)),
        "delete" | "rm" => Ok(Intent::Delete(parse_position(rest)?)),
        "filter" => rest.parse::<Filter>().map(Intent::SetFilter),
        "rename" => {
            let mut args = rest.splitn(2, char::is_whitespace);
            let pos = parse_position(args.next().unwrap_or(""))?;
            let name = args.next().unwrap_or("").trim().to_string();
            Ok(Intent::Rename(pos, name))
        }
        other => Err(format!("Unknown intent \"{}\" (try help)", other)),
    }
}

fn parse_position(s: &str) -> std::result::Result<usize, String> {
    if s.is_empty() {
        return Err("Missing position (try help)".to_string());
    }
    match s.parse::<usize>() {
        Ok(0) => Err("Positions start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("\"{}\" is not a list position", s)),
    }
}
