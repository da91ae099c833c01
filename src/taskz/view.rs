//! # View Composer
//!
//! Derives what the presentation layer shows from (task list, active filter):
//! the visible subsequence, a pluralized count summary, and the optional
//! focus signal. Views are recomputed from scratch on every transition and
//! never cached — [`View`] is a value, not a live handle into the store.

use crate::filter::Filter;
use crate::model::Task;
use serde::Serialize;

/// Side-channel signal to the presentation layer.
///
/// `Heading` asks the client to move focus to the list heading, an
/// accessibility affordance fired after the list shrinks (wherever the
/// removed task's own controls just disappeared from under the user).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusSignal {
    Heading,
}

/// Everything a client needs to render one frame.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    /// Visible tasks: the stable-filtered subsequence, insertion order.
    pub tasks: Vec<Task>,
    /// The active selector.
    pub filter: Filter,
    /// The full selector set, in display order.
    pub selectors: &'static [Filter],
    /// Count summary over the *visible* list, e.g. "2 tasks remaining".
    pub summary: String,
    pub focus: Option<FocusSignal>,
}

/// Stable filter: keeps insertion order, no re-sort.
pub fn visible(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}

/// `"{count} task remaining"` when count is exactly 1, `"tasks"` otherwise.
pub fn summary(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{} {} remaining", count, noun)
}

pub fn compose(tasks: &[Task], filter: Filter, focus: Option<FocusSignal>) -> View {
    let tasks = visible(tasks, filter);
    let summary = summary(tasks.len());
    View {
        tasks,
        filter,
        selectors: &Filter::SELECTORS,
        summary,
        focus,
    }
}
