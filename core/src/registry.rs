//! The ordered in-memory task collection. Insertion order is display
//! order, and users address tasks by 1-based position.

use crate::error::IndexError;
use crate::model::task::Task;

#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Appends and returns the new size.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Task, IndexError> {
        Ok(&self.tasks[self.slot(index)?])
    }

    pub fn mark_done(&mut self, index: usize) -> Result<&Task, IndexError> {
        let slot = self.slot(index)?;
        self.tasks[slot].mark_done();
        Ok(&self.tasks[slot])
    }

    pub fn mark_undone(&mut self, index: usize) -> Result<&Task, IndexError> {
        let slot = self.slot(index)?;
        self.tasks[slot].mark_undone();
        Ok(&self.tasks[slot])
    }

    /// Removes and returns the task at `index`. Every task after it
    /// shifts down by one, so positions held across a delete are stale.
    pub fn delete(&mut self, index: usize) -> Result<Task, IndexError> {
        let slot = self.slot(index)?;
        Ok(self.tasks.remove(slot))
    }

    /// Lazy case-sensitive substring search over descriptions, yielding
    /// each match with its original 1-based position. The empty keyword
    /// matches every task.
    pub fn find_by_keyword<'a>(
        &'a self,
        keyword: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Task)> + 'a {
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, task)| task.description.contains(keyword))
            .map(|(i, task)| (i + 1, task))
    }

    /// Read-only view in display order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    // 1-based index to vec slot; anything outside [1, len] is an error.
    fn slot(&self, index: usize) -> Result<usize, IndexError> {
        if (1..=self.tasks.len()).contains(&index) {
            Ok(index - 1)
        } else {
            Err(IndexError {
                index,
                len: self.tasks.len(),
            })
        }
    }
}
