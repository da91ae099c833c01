//! # CLI Behavior
//!
//! This is **one possible UI client** for taskz — not the application itself.
//! It is the only place in the codebase that knows about terminal I/O, exit
//! codes, and output formatting.
//!
//! ## Session Model
//!
//! Taskz deliberately has no persistence, so a one-shot subcommand interface
//! would throw the list away between invocations. Instead the binary runs one
//! interactive session: seed the list from startup flags, then read intents
//! line-by-line from stdin until EOF or `quit`, re-rendering the derived view
//! after every intent. Because intents come from stdin, the binary is equally
//! usable from a pipe (`printf 'add Code\nquit\n' | taskz --demo`).
//!
//! ## Addressing Tasks
//!
//! Interactive intents refer to tasks by their 1-based position in the
//! *currently visible* list, the numbers the user is looking at. The CLI
//! resolves a position to the task's stable id before calling the session;
//! the core only ever sees ids. An out-of-range position gets a warning here,
//! while an unknown id inside the core stays a silent no-op.
//!
//! ## Rendering
//!
//! Each frame shows the selector row, the visible tasks, and the count
//! heading. The focus signal (fired when the list shrinks) renders as an
//! underlined heading — the terminal stand-in for moving screen-reader focus.
//! `--json` swaps the styled frames for one JSON view per line, which is what
//! the e2e tests and any scripting consumers read.
//!
//! ## Structure
//!
//! - `setup`: Startup flag parsing via clap
//! - `commands`: The intent loop: parsing, position resolution, dispatch
//! - `render`: Output formatting (selector row, task list, heading, warnings)

mod commands;
mod render;
pub mod setup;

pub use commands::run;
