//! Day-bucket scheduler.
//!
//! # Algorithm
//!
//! 1. Keep only pending tasks; an empty set short-circuits to an empty plan.
//! 2. Sort by due date ascending (`None` last), then creation time ascending.
//! 3. Normalize the span: start defaults to today (UTC); the end defaults to
//!    the latest pending due date, or start + 7 days when nothing is dated;
//!    an end before the start collapses the span to the start day.
//! 4. Walk the span day by day while tasks remain, giving each working day
//!    up to `daily_capacity` tasks off the front of the queue.
//! 5. Append whatever is still queued to the last produced day, capacity
//!    notwithstanding ("better late than dropped").
//!
//! # Complexity
//! O(n log n + d) where n = tasks, d = days in the span.

use std::collections::VecDeque;

use chrono::{DateTime, Days, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{DayPlan, Project, ScheduleConfig, ScheduleResult, Task, WorkingDaySet};

/// Span length used when no end date is given and no pending task is dated.
const DEFAULT_SPAN_DAYS: u64 = 7;

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Project being scheduled.
    pub project_id: Uuid,
    /// The project's task snapshot.
    pub tasks: Vec<Task>,
    /// Caller configuration.
    pub config: ScheduleConfig,
}

impl ScheduleRequest {
    /// Creates a request with a default configuration.
    pub fn new(project_id: Uuid, tasks: Vec<Task>) -> Self {
        Self {
            project_id,
            tasks,
            config: ScheduleConfig::default(),
        }
    }

    /// Builds a request from a project aggregate.
    pub fn from_project(project: &Project) -> Self {
        Self::new(project.id, project.tasks.clone())
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: ScheduleConfig) -> Self {
        self.config = config;
        self
    }
}

/// Distributes pending tasks across working days under a daily capacity.
///
/// Stateless and free of side effects: the only non-input the scheduler
/// reads is the wall clock, once, for the result's generation timestamp
/// (and as the start-date default). [`schedule_at`](Self::schedule_at)
/// takes the clock explicitly, which makes the computation fully
/// deterministic.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use uuid::Uuid;
/// use tasky_schedule::models::{ScheduleConfig, Task};
/// use tasky_schedule::scheduler::DayBucketScheduler;
///
/// let project_id = Uuid::new_v4();
/// let tasks = vec![
///     Task::new(project_id, "ship release")
///         .with_due_date(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()),
/// ];
/// let config = ScheduleConfig::new()
///     .with_start_date(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
///
/// let plan = DayBucketScheduler::new().schedule(project_id, &tasks, &config);
/// assert_eq!(plan.total_scheduled(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DayBucketScheduler;

impl DayBucketScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules with the current wall-clock time.
    pub fn schedule(
        &self,
        project_id: Uuid,
        tasks: &[Task],
        config: &ScheduleConfig,
    ) -> ScheduleResult {
        self.schedule_at(project_id, tasks, config, Utc::now())
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> ScheduleResult {
        self.schedule(request.project_id, &request.tasks, &request.config)
    }

    /// Schedules with an explicit clock.
    ///
    /// `now` becomes the result's `generated_at_utc` and, when the
    /// configuration has no start date, its UTC calendar date becomes the
    /// span start. Fixed inputs and a fixed `now` always produce the same
    /// plan.
    pub fn schedule_at(
        &self,
        project_id: Uuid,
        tasks: &[Task],
        config: &ScheduleConfig,
        now: DateTime<Utc>,
    ) -> ScheduleResult {
        let pending = pending_in_priority_order(tasks);
        if pending.is_empty() {
            return ScheduleResult::empty(project_id, now);
        }

        let capacity = config.effective_capacity();
        let working_days = WorkingDaySet::from_names(&config.working_days);
        let start = config.start_date.unwrap_or_else(|| now.date_naive());
        let end = effective_end_date(config.end_date, &pending, start);

        let mut queue: VecDeque<Uuid> = pending.iter().map(|t| t.id).collect();
        let mut days: Vec<DayPlan> = Vec::new();
        let mut cursor = start;

        while cursor <= end && !queue.is_empty() {
            if working_days.is_working_day(cursor) {
                let mut bucket = DayPlan::new(cursor);
                for _ in 0..capacity {
                    match queue.pop_front() {
                        Some(id) => bucket.task_ids.push(id),
                        None => break,
                    }
                }
                days.push(bucket);
            }
            cursor = match cursor.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }

        // Leftovers go onto the last produced day, over capacity if need be.
        // If the span contained no working day at all, nothing was produced
        // and the leftovers stay unplaced; callers relying on the no-loss
        // property must supply a span with at least one working day.
        if !queue.is_empty() {
            if let Some(last) = days.last_mut() {
                last.task_ids.extend(queue);
            }
        }

        ScheduleResult {
            project_id,
            generated_at_utc: now,
            days,
        }
    }
}

/// Pending tasks in assignment priority order.
///
/// Due date ascending with `None` after every dated task, then creation
/// time ascending. The sort is stable, so equal keys keep input order.
fn pending_in_priority_order(tasks: &[Task]) -> Vec<&Task> {
    let mut pending: Vec<&Task> = tasks.iter().filter(|t| t.is_pending()).collect();
    pending.sort_by_key(|t| (t.due_date.unwrap_or(NaiveDate::MAX), t.created_at));
    pending
}

/// Resolves the inclusive span end.
///
/// A supplied end date wins; otherwise the latest due date among the
/// pending tasks, or `start + 7 days` when none is dated. Never earlier
/// than `start`.
fn effective_end_date(
    configured: Option<NaiveDate>,
    pending: &[&Task],
    start: NaiveDate,
) -> NaiveDate {
    let end = configured.unwrap_or_else(|| {
        pending
            .iter()
            .filter_map(|t| t.due_date)
            .max()
            .unwrap_or_else(|| {
                start
                    .checked_add_days(Days::new(DEFAULT_SPAN_DAYS))
                    .unwrap_or(NaiveDate::MAX)
            })
    });
    end.max(start)
}
