//! Day-bucket scheduling for task/project managers.
//!
//! Given a project's task snapshot and a caller configuration, the scheduler
//! distributes every pending (incomplete) task across the working days of a
//! date span, filling each day up to a capacity limit and spilling whatever
//! remains onto the last working day so that no task is ever dropped.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Project`, `ScheduleConfig`,
//!   `WorkingDaySet`, `DayPlan`, `ScheduleResult`
//! - **`scheduler`**: `DayBucketScheduler` (the assignment algorithm) and
//!   `PlanSummary` (plan-quality metrics)
//! - **`validation`**: Input integrity checks (duplicate IDs, foreign tasks)
//!
//! # Architecture
//!
//! The scheduler is a stateless pure computation: it performs no I/O and
//! assumes the caller has already resolved ownership and loaded the task
//! snapshot. Persistence, authentication, and HTTP transport belong to the
//! surrounding application, not this crate.

pub mod models;
pub mod scheduler;
pub mod validation;
