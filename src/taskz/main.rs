//! Taskz binary entry point.
//!
//! The binary is intentionally thin: the CLI lives in `src/taskz/cli/`, and
//! this file only invokes `cli::run()` and handles process termination. See
//! the library crate docs for the overall architecture — everything from the
//! session facade inward is UI agnostic, and this CLI is one possible client.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
