//! Task entity.
//!
//! A task is the unit of work the scheduler distributes across days. The
//! scheduler reads only four of its fields: `id`, `due_date`, `is_completed`,
//! and `created_at` (the tie-break ordering key). The rest is carried so the
//! type can round-trip through the surrounding application unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task belonging to a project.
///
/// Only tasks with `is_completed == false` are eligible for scheduling.
/// `due_date` is a calendar date; any time-of-day the caller held is
/// discarded before it gets here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Human-readable title.
    pub title: String,
    /// Target completion date. `None` = no deadline; sorts after all dated tasks.
    pub due_date: Option<NaiveDate>,
    /// Whether the task is done. Completed tasks are never scheduled.
    pub is_completed: bool,
    /// Creation timestamp, used as the ordering tie-break.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task with a fresh id, created now.
    pub fn new(project_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            title: title.into(),
            due_date: None,
            is_completed: false,
            created_at: Utc::now(),
        }
    }

    /// Sets the task id (useful when rehydrating from storage).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Marks the task completed.
    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Whether the task is still awaiting completion.
    #[inline]
    pub fn is_pending(&self) -> bool {
        !self.is_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_task_builder() {
        let project = Uuid::new_v4();
        let due = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();

        let task = Task::new(project, "Write report")
            .with_due_date(due)
            .with_created_at(created);

        assert_eq!(task.project_id, project);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.created_at, created);
        assert!(task.is_pending());
    }

    #[test]
    fn test_completed_task_not_pending() {
        let task = Task::new(Uuid::new_v4(), "Done already").completed();
        assert!(task.is_completed);
        assert!(!task.is_pending());
    }

    #[test]
    fn test_task_serde_camel_case() {
        let task = Task::new(Uuid::new_v4(), "t");
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("projectId").is_some());
        assert!(json.get("dueDate").is_some());
        assert!(json.get("isCompleted").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
