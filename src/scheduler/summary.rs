//! Plan metrics.
//!
//! Read-only statistics over a generated plan, for dashboards and sanity
//! checks: how many days and tasks the plan covers, how loaded the busiest
//! day is, and how far the final day ran over the nominal capacity after
//! overflow.

use crate::models::ScheduleResult;

/// Quality indicators for a generated plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    /// Number of day buckets in the plan.
    pub day_count: usize,
    /// Total tasks placed.
    pub task_count: usize,
    /// Heaviest single-day load.
    pub max_day_load: usize,
    /// Tasks on the final day beyond the nominal capacity.
    ///
    /// Non-zero only when the span was too short to absorb every task and
    /// the scheduler spilled the remainder onto the last day.
    pub final_day_overflow: usize,
}

impl PlanSummary {
    /// Computes summary metrics from a plan.
    ///
    /// `daily_capacity` should be the same effective capacity the plan was
    /// generated with; it is only used to measure final-day overflow.
    pub fn calculate(plan: &ScheduleResult, daily_capacity: usize) -> Self {
        let day_count = plan.day_count();
        let task_count = plan.total_scheduled();
        let max_day_load = plan.days.iter().map(|d| d.load()).max().unwrap_or(0);
        let final_day_overflow = plan
            .days
            .last()
            .map(|d| d.load().saturating_sub(daily_capacity))
            .unwrap_or(0);

        Self {
            day_count,
            task_count,
            max_day_load,
            final_day_overflow,
        }
    }

    /// Whether every day, including the last, stayed within capacity.
    pub fn is_within_capacity(&self) -> bool {
        self.final_day_overflow == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayPlan, ScheduleResult};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn plan_with_loads(loads: &[usize]) -> ScheduleResult {
        let days = loads
            .iter()
            .enumerate()
            .map(|(i, &n)| DayPlan {
                date: NaiveDate::from_ymd_opt(2025, 6, 2 + i as u32).unwrap(),
                task_ids: (0..n).map(|_| Uuid::new_v4()).collect(),
            })
            .collect();
        ScheduleResult {
            project_id: Uuid::new_v4(),
            generated_at_utc: Utc::now(),
            days,
        }
    }

    #[test]
    fn test_summary_basic() {
        let summary = PlanSummary::calculate(&plan_with_loads(&[2, 2, 5]), 2);
        assert_eq!(summary.day_count, 3);
        assert_eq!(summary.task_count, 9);
        assert_eq!(summary.max_day_load, 5);
        assert_eq!(summary.final_day_overflow, 3);
        assert!(!summary.is_within_capacity());
    }

    #[test]
    fn test_summary_no_overflow() {
        let summary = PlanSummary::calculate(&plan_with_loads(&[3, 3, 1]), 3);
        assert_eq!(summary.final_day_overflow, 0);
        assert!(summary.is_within_capacity());
    }

    #[test]
    fn test_summary_empty_plan() {
        let summary = PlanSummary::calculate(&plan_with_loads(&[]), 5);
        assert_eq!(summary.day_count, 0);
        assert_eq!(summary.task_count, 0);
        assert_eq!(summary.max_day_load, 0);
        assert!(summary.is_within_capacity());
    }
}
