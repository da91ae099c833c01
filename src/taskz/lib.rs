//! # Taskz Architecture
//!
//! Taskz is a **UI-agnostic task list engine**. This is not a terminal
//! application that happens to have some library code — it's a library that
//! happens to ship with a terminal client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses startup flags, reads intents line-by-line         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Facade (api.rs)                                    │
//! │  - One method per user intent                               │
//! │  - Tracks the previous total for the focus signal           │
//! │  - Returns a structured View per transition                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store.rs, filter.rs, view.rs)                        │
//! │  - Pure list transitions, total functions, no I/O           │
//! │  - Derived views recomputed on every transition             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Total Transitions
//!
//! Every core operation is a total function from (current list, arguments) to
//! a new list. Unknown ids are silent no-ops; empty and duplicate names are
//! accepted verbatim. This mirrors the source system's deliberate simplicity
//! and is preserved as-is — warnings about dangling references belong to the
//! client, not the core.
//!
//! ## State Model
//!
//! One session owns one [`store::TaskStore`] and one active
//! [`filter::Filter`]. Each user intent triggers one synchronous transition
//! followed by one recomputed [`view::View`]; nothing suspends, blocks, or
//! runs concurrently. There is no persistence — a session lives and dies with
//! its process.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade — entry point for all operations
//! - [`store`]: The task list and its four transitions
//! - [`filter`]: The closed selector set and its predicate table
//! - [`view`]: Derived view composition and the focus signal
//! - [`model`]: The `Task` record and the demo seed
//! - [`id`]: Id generation seam
//! - [`error`]: Boundary error types
//! - `cli`: Flag parsing, the intent loop, and rendering for the binary
//!   (not part of the lib API)

pub mod api;
pub mod error;
pub mod filter;
pub mod id;
pub mod model;
pub mod store;
pub mod view;
