//! Day-bucket scheduler and plan metrics.
//!
//! # Algorithm
//!
//! `DayBucketScheduler` orders a project's pending tasks by urgency
//! (earliest due date first, no due date last, creation time as tie-break),
//! walks the working days of the configured span, and fills each day up to
//! the daily capacity. Tasks left over when the span runs out are appended
//! to the last produced day so nothing is dropped.
//!
//! # Metrics
//!
//! `PlanSummary` computes read-only plan statistics: day and task counts,
//! the busiest day's load, and how far the final day overflowed the nominal
//! capacity.

mod day_bucket;
mod summary;

pub use day_bucket::{DayBucketScheduler, ScheduleRequest};
pub use summary::PlanSummary;
