//! Schedule plan (output) model.
//!
//! The scheduler's result: one `DayPlan` per working day that received
//! tasks, wrapped in a `ScheduleResult` with the generation timestamp.
//! Serializes to the wire shape
//! `{ projectId, generatedAtUtc, days: [{ date, taskIds }] }`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tasks assigned to one working day.
///
/// `task_ids` preserves assignment order: higher-priority tasks come first.
/// Every day but the last respects the configured capacity; the last day may
/// additionally hold overflow tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// The working day this bucket covers.
    pub date: NaiveDate,
    /// Tasks assigned to this day, in priority order.
    pub task_ids: Vec<Uuid>,
}

impl DayPlan {
    /// Creates an empty bucket for a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            task_ids: Vec::new(),
        }
    }

    /// Number of tasks assigned to this day.
    #[inline]
    pub fn load(&self) -> usize {
        self.task_ids.len()
    }
}

/// A complete day-by-day assignment for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// The scheduled project.
    pub project_id: Uuid,
    /// Wall-clock time the plan was generated.
    pub generated_at_utc: DateTime<Utc>,
    /// Day buckets in ascending date order. Empty when nothing was pending.
    pub days: Vec<DayPlan>,
}

impl ScheduleResult {
    /// Creates a result with no day buckets.
    pub fn empty(project_id: Uuid, generated_at_utc: DateTime<Utc>) -> Self {
        Self {
            project_id,
            generated_at_utc,
            days: Vec::new(),
        }
    }

    /// Whether the plan assigns any tasks.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of day buckets.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total tasks placed across all days.
    pub fn total_scheduled(&self) -> usize {
        self.days.iter().map(DayPlan::load).sum()
    }

    /// All scheduled task ids, in day order then within-day order.
    ///
    /// This is the plan's global priority sequence.
    pub fn scheduled_task_ids(&self) -> Vec<Uuid> {
        self.days
            .iter()
            .flat_map(|d| d.task_ids.iter().copied())
            .collect()
    }

    /// The bucket for a given date, if one exists.
    pub fn day(&self, date: NaiveDate) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.date == date)
    }
}
