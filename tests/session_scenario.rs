use std::collections::HashSet;

use taskz::api::TaskSession;
use taskz::filter::Filter;
use taskz::model::{demo_tasks, Task};
use taskz::view::{FocusSignal, View};

fn names(view: &View) -> Vec<&str> {
    view.tasks.iter().map(|task| task.name.as_str()).collect()
}

#[test]
fn full_session_lifecycle() {
    let mut session: TaskSession = TaskSession::with_tasks(demo_tasks());

    // First frame: everything visible, no focus yet.
    let view = session.refresh();
    assert_eq!(names(&view), ["Eat", "Sleep", "Repeat"]);
    assert_eq!(view.summary, "3 tasks remaining");
    assert_eq!(view.focus, None);

    // Narrow to completed: only the seeded done task shows.
    let view = session.set_filter(Filter::Completed);
    assert_eq!(names(&view), ["Eat"]);
    assert_eq!(view.summary, "1 task remaining");

    // Un-completing it empties the completed view. The total is unchanged,
    // so no focus even though the visible list shrank.
    let view = session.toggle("todo-0");
    assert!(view.tasks.is_empty());
    assert_eq!(view.summary, "0 tasks remaining");
    assert_eq!(view.focus, None);

    session.set_filter(Filter::All);

    // A real deletion shrinks the total and fires the heading focus.
    let view = session.delete("todo-2");
    assert_eq!(names(&view), ["Eat", "Sleep"]);
    assert_eq!(view.focus, Some(FocusSignal::Heading));

    // Growing again clears it.
    let view = session.add("Code");
    assert_eq!(view.summary, "3 tasks remaining");
    assert_eq!(view.focus, None);
}

#[test]
fn generated_ids_are_unique_and_prefixed() {
    let mut session: TaskSession = TaskSession::new();
    for i in 0..5 {
        session.add(format!("task {}", i));
    }

    let view = session.refresh();
    let ids: HashSet<&str> = view.tasks.iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.iter().all(|id| id.starts_with("todo-")));
}

#[test]
fn unknown_ids_are_silent_noops() {
    let seed = vec![Task::new("todo-9", "Draft")];
    let mut session: TaskSession = TaskSession::with_tasks(seed);

    let view = session.rename("todo-9", "Final");
    assert_eq!(names(&view), ["Final"]);

    let view = session.rename("missing", "X");
    assert_eq!(names(&view), ["Final"]);

    let view = session.toggle("missing");
    assert!(!view.tasks[0].completed);

    let view = session.delete("missing");
    assert_eq!(names(&view), ["Final"]);
    assert_eq!(view.focus, None);
}
