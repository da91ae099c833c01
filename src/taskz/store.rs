//! # Task Store
//!
//! [`TaskStore`] owns the one live, insertion-ordered list of tasks and
//! exposes the four state transitions: add, toggle, rename, delete.
//!
//! Two properties are load-bearing and preserved from the source system:
//!
//! - **Every operation is total.** There is no error path: an unknown id is a
//!   silent no-op, an empty or duplicate name is accepted as-is. Callers that
//!   want to warn about a bad reference do so before reaching the store.
//! - **Copy-on-write mutation.** Each transition rebuilds the list so that
//!   only the affected record differs; nothing outside the store can hold a
//!   reference into the old list across a mutation.
//!
//! The store is generic over the [`IdGenerator`] seam so tests can run with
//! deterministic ids.

use crate::id::{IdGenerator, UuidIds};
use crate::model::Task;

pub struct TaskStore<G: IdGenerator = UuidIds> {
    tasks: Vec<Task>,
    ids: G,
}

impl TaskStore<UuidIds> {
    pub fn new() -> Self {
        Self::seeded(Vec::new(), UuidIds)
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self::seeded(tasks, UuidIds)
    }
}

impl Default for TaskStore<UuidIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TaskStore<G> {
    /// Build a store from initial data and an id generator. Seeded tasks keep
    /// the ids they came with; only `add` consults the generator.
    pub fn seeded(tasks: Vec<Task>, ids: G) -> Self {
        Self { tasks, ids }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task with a fresh id, not completed. Returns the id.
    /// The name is taken verbatim; empty names are legal.
    pub fn add(&mut self, name: impl Into<String>) -> String {
        let id = self.ids.generate();
        let mut next = self.tasks.clone();
        next.push(Task::new(id.clone(), name));
        self.tasks = next;
        id
    }

    /// Flip `completed` on the matching task. Unknown id: no-op.
    pub fn toggle_completed(&mut self, id: &str) {
        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    Task {
                        completed: !task.completed,
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();
    }

    /// Replace the name on the matching task, verbatim. Unknown id: no-op.
    pub fn rename(&mut self, id: &str, new_name: impl Into<String>) {
        let new_name = new_name.into();
        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    Task {
                        name: new_name.clone(),
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();
    }

    /// Remove the matching task. Unknown id: no-op.
    pub fn delete(&mut self, id: &str) {
        self.tasks = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
    }
}
