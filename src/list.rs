//! Ordered, index-addressed task collection.
//!
//! `TaskList` owns its tasks exclusively. Insertion order is display order
//! is storage order. All indices are 0-based; bounds failures report the
//! 1-based task number users see, so errors surface unchanged.
//!
//! `insert` exists to undo a prior `remove` at the same index during
//! rollback, not for general insertion.

use crate::error::{Error, Result};
use crate::task::Task;

/// The in-memory list of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty task list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task list from an already-loaded sequence.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Append a task to the end of the list.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Insert a task at `index`, shifting later tasks right.
    ///
    /// `index` may equal `len()` (append position).
    pub fn insert(&mut self, index: usize, task: Task) -> Result<()> {
        if index > self.tasks.len() {
            return Err(self.bad_index(index));
        }
        self.tasks.insert(index, task);
        Ok(())
    }

    /// Remove and return the task at `index`, shifting later tasks left.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(self.bad_index(index));
        }
        Ok(self.tasks.remove(index))
    }

    /// The task at `index`.
    pub fn get(&self, index: usize) -> Result<&Task> {
        self.tasks.get(index).ok_or_else(|| self.bad_index(index))
    }

    /// Mutable access to the task at `index`. This is the only sanctioned
    /// way to change a task in place.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or(Error::InvalidIndex {
                number: index + 1,
                len,
            })
    }

    /// Number of tasks in the list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over the tasks in order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// The full list as a slice, in order. This is what gets persisted.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks whose descriptions contain `keyword`, case-insensitively,
    /// paired with their current 0-based index, in list order.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().to_lowercase().contains(&needle))
            .collect()
    }

    fn bad_index(&self, index: usize) -> Error {
        Error::InvalidIndex {
            number: index + 1,
            len: self.tasks.len(),
        }
    }
}
