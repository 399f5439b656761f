//! Transactional task operations.
//!
//! `Tracker` owns the in-memory [`TaskList`] and its [`Storage`], and keeps
//! the two consistent: every mutation is applied in memory, the full list is
//! persisted, and if the persist fails the in-memory change is reversed
//! exactly before the error propagates. After any call, memory matches the
//! last successfully saved file.
//!
//! The whole mutate+persist+rollback sequence is the unit of atomicity.
//! Commands are processed one at a time; nothing here runs concurrently.

use tracing::debug;

use crate::error::Result;
use crate::list::TaskList;
use crate::storage::Storage;
use crate::task::Task;

/// The task list plus its backing storage.
#[derive(Debug)]
pub struct Tracker {
    tasks: TaskList,
    storage: Storage,
}

impl Tracker {
    /// Load the saved list from `storage` and wrap it.
    ///
    /// Returns the tracker and the number of corrupt lines skipped during
    /// the load, so the caller can warn the user.
    pub fn open(storage: Storage) -> Result<(Self, usize)> {
        let report = storage.load()?;
        let tracker = Self {
            tasks: TaskList::from_tasks(report.tasks),
            storage,
        };
        Ok((tracker, report.skipped))
    }

    /// Append a task and persist. Returns a reference to the stored task.
    pub fn add(&mut self, task: Task) -> Result<&Task> {
        self.tasks.add(task);

        if let Err(err) = self.storage.save(self.tasks.tasks()) {
            // The task we just appended is last; removing it restores the
            // exact pre-call state.
            let _ = self.tasks.remove(self.tasks.len() - 1);
            return Err(err);
        }

        debug!(len = self.tasks.len(), "added task");
        self.tasks.get(self.tasks.len() - 1)
    }

    /// Remove the task at `index` and persist. Returns the removed task.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        let removed = self.tasks.remove(index)?;

        if let Err(err) = self.storage.save(self.tasks.tasks()) {
            // index <= len holds again after the removal above.
            let _ = self.tasks.insert(index, removed);
            return Err(err);
        }

        debug!(index, len = self.tasks.len(), "removed task");
        Ok(removed)
    }

    /// Mark the task at `index` as done and persist.
    pub fn mark(&mut self, index: usize) -> Result<&Task> {
        self.set_done(index, true)
    }

    /// Mark the task at `index` as not done and persist.
    pub fn unmark(&mut self, index: usize) -> Result<&Task> {
        self.set_done(index, false)
    }

    fn set_done(&mut self, index: usize, value: bool) -> Result<&Task> {
        let previous = {
            let task = self.tasks.get_mut(index)?;
            let previous = task.is_done();
            task.set_done(value);
            previous
        };

        if let Err(err) = self.storage.save(self.tasks.tasks()) {
            if let Ok(task) = self.tasks.get_mut(index) {
                task.set_done(previous);
            }
            return Err(err);
        }

        debug!(index, done = value, "updated completion flag");
        self.tasks.get(index)
    }

    /// The task at `index`.
    pub fn get(&self, index: usize) -> Result<&Task> {
        self.tasks.get(index)
    }

    /// All tasks in order.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Case-insensitive substring search over descriptions; matches are
    /// paired with their current 0-based index.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        self.tasks.find(keyword)
    }
}
