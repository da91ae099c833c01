//! # Filter Engine
//!
//! A [`Filter`] is one of a closed set of three selectors. Exactly one is
//! active per session; the default is [`Filter::All`]. The mapping from
//! selector to predicate is a fixed table of fn pointers, not dynamic
//! dispatch — it never grows at runtime.
//!
//! [`Filter::SELECTORS`] is the ordered selector set the presentation layer
//! uses to build its filter controls.

use crate::model::Task;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// The selector set, in display order.
    pub const SELECTORS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Static predicate lookup.
    pub fn predicate(self) -> fn(&Task) -> bool {
        match self {
            Filter::All => |_| true,
            Filter::Active => |task| !task.completed,
            Filter::Completed => |task| task.completed,
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        (self.predicate())(task)
    }

    pub fn name(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!(
                "Unknown filter \"{}\" (expected all, active or completed)",
                other
            )),
        }
    }
}
