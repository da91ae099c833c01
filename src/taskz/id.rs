//! Id generation seam.
//!
//! The store calls [`IdGenerator::generate`] exactly once per `add`. Ids are
//! expected to never collide within a session; nothing re-checks uniqueness
//! downstream. Production uses [`UuidIds`]; tests inject [`SequentialIds`] to
//! get the stable `todo-0`, `todo-1`, … ids the fixtures are written against.

use uuid::Uuid;

pub trait IdGenerator {
    /// Produce a fresh identifier, unique within the session.
    fn generate(&mut self) -> String;
}

/// Collision-resistant ids: `todo-` plus a v4 UUID in simple format.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&mut self) -> String {
        format!("todo-{}", Uuid::new_v4().simple())
    }
}

/// Deterministic ids for tests: `todo-0`, `todo-1`, …
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: usize,
}

#[cfg(any(test, feature = "test_utils"))]
impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> String {
        let id = format!("todo-{}", self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_are_prefixed_and_unique() {
        let mut ids = UuidIds;
        let generated: HashSet<String> = (0..100).map(|_| ids.generate()).collect();
        assert_eq!(generated.len(), 100);
        assert!(generated.iter().all(|id| id.starts_with("todo-")));
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.generate(), "todo-0");
        assert_eq!(ids.generate(), "todo-1");
        assert_eq!(ids.generate(), "todo-2");
    }
}
