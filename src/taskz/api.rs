//! # Session Facade
//!
//! [`TaskSession`] is the single entry point for clients: one method per user
//! intent, each applying a synchronous state transition and returning the
//! freshly composed [`View`]. Clients never reach into the store or the
//! filter directly for rendering.
//!
//! The session also owns the previous-total bookkeeping behind the focus
//! signal: after every transition the new total task count is compared
//! against the previous one, and the view carries
//! [`FocusSignal::Heading`] iff the list shrank. The first render never
//! fires — there is no previous value to shrink from.
//!
//! Generic over [`IdGenerator`] so tests can run with deterministic ids, the
//! same way the storage seam is injected elsewhere in this family of tools.

use crate::filter::Filter;
use crate::id::{IdGenerator, UuidIds};
use crate::model::Task;
use crate::store::TaskStore;
use crate::view::{self, FocusSignal, View};

pub struct TaskSession<G: IdGenerator = UuidIds> {
    store: TaskStore<G>,
    filter: Filter,
    prev_total: Option<usize>,
}

impl TaskSession<UuidIds> {
    pub fn new() -> Self {
        Self::seeded(Vec::new(), UuidIds)
    }

    /// Start from initial data supplied by the hosting environment.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self::seeded(tasks, UuidIds)
    }
}

impl Default for TaskSession<UuidIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TaskSession<G> {
    pub fn seeded(tasks: Vec<Task>, ids: G) -> Self {
        Self {
            store: TaskStore::seeded(tasks, ids),
            filter: Filter::default(),
            prev_total: None,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Intent: add a task with the given name (taken verbatim).
    pub fn add(&mut self, name: impl Into<String>) -> View {
        self.store.add(name);
        self.render()
    }

    /// Intent: flip completion on the task with this id. Unknown id: no-op.
    pub fn toggle(&mut self, id: &str) -> View {
        self.store.toggle_completed(id);
        self.render()
    }

    /// Intent: rename the task with this id. Unknown id: no-op.
    pub fn rename(&mut self, id: &str, new_name: impl Into<String>) -> View {
        self.store.rename(id, new_name);
        self.render()
    }

    /// Intent: delete the task with this id. Unknown id: no-op.
    pub fn delete(&mut self, id: &str) -> View {
        self.store.delete(id);
        self.render()
    }

    /// Intent: switch the active selector.
    pub fn set_filter(&mut self, filter: Filter) -> View {
        self.filter = filter;
        self.render()
    }

    /// Re-render without a state transition (initial frame, `list`).
    pub fn refresh(&mut self) -> View {
        self.render()
    }

    fn render(&mut self) -> View {
        let total = self.store.len();
        let focus = match self.prev_total {
            Some(prev) if total < prev => Some(FocusSignal::Heading),
            _ => None,
        };
        self.prev_total = Some(total);
        view::compose(self.store.tasks(), self.filter, focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIds;
    use crate::model::demo_tasks;

    fn session_with(tasks: Vec<Task>) -> TaskSession<SequentialIds> {
        // Seed ids occupy todo-0..todo-N; start the generator past them so
        // added tasks don't collide.
        let next = tasks.len();
        let mut ids = SequentialIds::default();
        for _ in 0..next {
            ids.generate();
        }
        TaskSession::seeded(tasks, ids)
    }

    #[test]
    fn first_render_never_fires_focus() {
        let mut session = TaskSession::with_tasks(demo_tasks());
        let view = session.refresh();
        assert!(view.focus.is_none());
    }

    #[test]
    fn default_filter_is_all() {
        let mut session = TaskSession::with_tasks(demo_tasks());
        let view = session.refresh();
        assert_eq!(view.filter, Filter::All);
        assert_eq!(view.tasks.len(), 3);
    }

    #[test]
    fn add_shows_up_in_the_view_with_no_focus() {
        let mut session = session_with(Vec::new());
        session.refresh();
        let view = session.add("Code");
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].name, "Code");
        assert_eq!(view.summary, "1 task remaining");
        assert!(view.focus.is_none());
    }

    #[test]
    fn toggle_does_not_fire_focus() {
        let mut session = TaskSession::with_tasks(demo_tasks());
        session.refresh();
        let view = session.toggle("todo-1");
        assert!(view.focus.is_none());
        assert!(view.tasks.iter().find(|t| t.id == "todo-1").unwrap().completed);
    }

    #[test]
    fn delete_fires_focus_when_the_total_shrinks() {
        let mut session = TaskSession::with_tasks(demo_tasks());
        session.refresh();
        let view = session.delete("todo-1");
        assert_eq!(view.focus, Some(FocusSignal::Heading));
        assert_eq!(view.tasks.len(), 2);
    }

    #[test]
    fn delete_of_unknown_id_does_not_fire_focus() {
        let mut session = TaskSession::with_tasks(demo_tasks());
        session.refresh();
        let view = session.delete("todo-404");
        assert!(view.focus.is_none());
        assert_eq!(view.tasks.len(), 3);
    }

    #[test]
    fn focus_clears_on_the_next_render() {
        let mut session = TaskSession::with_tasks(demo_tasks());
        session.refresh();
        assert!(session.delete("todo-2").focus.is_some());
        assert!(session.refresh().focus.is_none());
    }

    #[test]
    fn set_filter_narrows_the_view() {
        let mut session = TaskSession::with_tasks(demo_tasks());
        let view = session.set_filter(Filter::Completed);
        let names: Vec<&str> = view.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Eat"]);
        assert_eq!(view.summary, "1 task remaining");
    }

    #[test]
    fn worked_example_from_the_source_system() {
        // Seed: Eat (completed), Sleep. Then: filter Active, add Code,
        // delete Sleep.
        let seed = vec![
            Task {
                id: "todo-0".into(),
                name: "Eat".into(),
                completed: true,
            },
            Task {
                id: "todo-1".into(),
                name: "Sleep".into(),
                completed: false,
            },
        ];
        let mut session = session_with(seed);

        let view = session.set_filter(Filter::Active);
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].name, "Sleep");
        assert_eq!(view.summary, "1 task remaining");

        let view = session.add("Code");
        let names: Vec<&str> = view.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Sleep", "Code"]);
        assert_eq!(view.summary, "2 tasks remaining");
        assert!(view.focus.is_none());

        let view = session.delete("todo-1");
        let names: Vec<&str> = view.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Code"]);
        assert_eq!(view.summary, "1 task remaining");
        // Total dropped from 3 to 2.
        assert_eq!(view.focus, Some(FocusSignal::Heading));
    }
}
