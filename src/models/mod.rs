//! Scheduling domain models.
//!
//! Core data types for day-bucket scheduling: the task and project entities
//! supplied by the caller, the scheduling configuration, the working-day
//! filter, and the produced plan.
//!
//! All calendar dates are `chrono::NaiveDate` (time-of-day is never
//! significant to the scheduler); timestamps are `chrono::DateTime<Utc>`.

mod config;
mod plan;
mod project;
mod task;
mod working_days;

pub use config::{ScheduleConfig, DEFAULT_DAILY_CAPACITY};
pub use plan::{DayPlan, ScheduleResult};
pub use project::Project;
pub use task::Task;
pub use working_days::WorkingDaySet;
