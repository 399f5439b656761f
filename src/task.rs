//! Task model for tsk.
//!
//! A task is one of three kinds: a plain todo, a deadline with a due date,
//! or an event with a start and end. The kind and its temporal data are
//! fixed at creation; only the completion flag changes afterwards.
//!
//! Tasks have no stable id. Identity is positional: a task is addressed by
//! its current index in the list, and any such reference is invalidated by
//! the next mutation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single task. The `Serialize` impl feeds the CLI's `--json` mode; the
/// durable on-disk representation is the line format in [`crate::codec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Task {
    /// A task with only a description.
    Todo { description: String, done: bool },

    /// A task due by a calendar date.
    Deadline {
        description: String,
        done: bool,
        due: NaiveDate,
    },

    /// A task spanning a time period. `start <= end` is not enforced.
    Event {
        description: String,
        done: bool,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Task {
    /// Create a todo task, initially not done.
    pub fn todo(description: impl Into<String>) -> Self {
        Task::Todo {
            description: description.into(),
            done: false,
        }
    }

    /// Create a deadline task, initially not done.
    pub fn deadline(description: impl Into<String>, due: NaiveDate) -> Self {
        Task::Deadline {
            description: description.into(),
            done: false,
            due,
        }
    }

    /// Create an event task, initially not done.
    pub fn event(description: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Task::Event {
            description: description.into(),
            done: false,
            start,
            end,
        }
    }

    /// The task description.
    pub fn description(&self) -> &str {
        match self {
            Task::Todo { description, .. }
            | Task::Deadline { description, .. }
            | Task::Event { description, .. } => description,
        }
    }

    /// Whether the task is marked as done.
    pub fn is_done(&self) -> bool {
        match self {
            Task::Todo { done, .. } | Task::Deadline { done, .. } | Task::Event { done, .. } => {
                *done
            }
        }
    }

    /// Mark the task as done.
    pub fn mark(&mut self) {
        self.set_done(true);
    }

    /// Mark the task as not done.
    pub fn unmark(&mut self) {
        self.set_done(false);
    }

    /// Set the completion flag directly. Used by rollback to restore the
    /// exact prior state.
    pub fn set_done(&mut self, value: bool) {
        match self {
            Task::Todo { done, .. } | Task::Deadline { done, .. } | Task::Event { done, .. } => {
                *done = value;
            }
        }
    }
}
