//! # Domain Model: Task Records
//!
//! A [`Task`] is the whole of the data model: an opaque string id, a name, and
//! a completion flag. The id is assigned once at creation and never changes;
//! name and completion are the only mutable fields. Anything richer
//! (timestamps, tags, ordering keys) is deliberately out of scope.
//!
//! The [`TaskStore`](crate::store::TaskStore) owns the only live list of
//! tasks. Everything handed outward is a clone, so a mutation can never be
//! observed through a stale reference.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

impl Task {
    /// A fresh task starts out not completed.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
        }
    }
}

/// The canonical sample list used by `--demo` and the docs.
pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "todo-0".to_string(),
            name: "Eat".to_string(),
            completed: true,
        },
        Task {
            id: "todo-1".to_string(),
            name: "Sleep".to_string(),
            completed: false,
        },
        Task {
            id: "todo-2".to_string(),
            name: "Repeat".to_string(),
            completed: false,
        },
    ]
}
