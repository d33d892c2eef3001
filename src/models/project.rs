//! Project aggregate.
//!
//! A project carries the task snapshot the scheduler operates on. Ownership
//! and existence checks (is this project the caller's to schedule?) happen
//! in the surrounding application before a `Project` reaches this crate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Task;

/// A project and its task snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Tasks belonging to this project.
    pub tasks: Vec<Task>,
}

impl Project {
    /// Creates an empty project with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Sets the project id (useful when rehydrating from storage).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Adds a task to the snapshot.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Tasks still awaiting completion.
    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_pending()).collect()
    }

    /// Number of tasks in the snapshot.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
