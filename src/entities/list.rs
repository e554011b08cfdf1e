//! Insertion-ordered task collection.

use serde::{Deserialize, Serialize};

use super::Task;

/// Ordered task collection addressed by 0-based position.
///
/// Append-only except for in-place completion marking. The front-end
/// owning a session constructs exactly one of these and drops it at
/// process exit; nothing is ever persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    /// Tasks in insertion order, which is also display order
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create a new empty task list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the end of the list
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// All tasks in insertion order, read-only
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Task at `position`, if one exists
    pub fn get(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    /// Mark the task at `position` completed.
    ///
    /// Positions outside `[0, len)` are ignored without error, panic,
    /// or log line.
    pub fn mark_completed(&mut self, position: usize) {
        if let Some(task) = self.tasks.get_mut(position) {
            task.mark_completed();
        }
    }

    /// Get task count
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get completed task count
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
