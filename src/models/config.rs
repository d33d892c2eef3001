//! Scheduling configuration.
//!
//! Everything in the configuration is optional: missing or malformed values
//! are normalized to safe defaults rather than rejected. An empty JSON body
//! `{}` deserializes to the documented defaults (today, capacity 5, Mon–Fri).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily capacity used when the caller supplies none.
pub const DEFAULT_DAILY_CAPACITY: i32 = 5;

/// Caller-supplied scheduling parameters.
///
/// `working_days` holds the raw day names as the caller sent them
/// ("Mon", "monday", "FRI", ...); normalization into a
/// [`WorkingDaySet`](super::WorkingDaySet) happens at scheduling time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleConfig {
    /// First date of the span. `None` = today (UTC).
    pub start_date: Option<NaiveDate>,
    /// Last date of the span, inclusive. `None` = derived from due dates.
    pub end_date: Option<NaiveDate>,
    /// Maximum tasks per working day. Values below 1 collapse to 1.
    pub daily_capacity: i32,
    /// Raw working-day names. Empty = Mon–Fri default.
    pub working_days: Vec<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            daily_capacity: DEFAULT_DAILY_CAPACITY,
            working_days: Vec::new(),
        }
    }
}

impl ScheduleConfig {
    /// Creates a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the span start date.
    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Sets the span end date (inclusive).
    pub fn with_end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Sets the daily capacity.
    pub fn with_daily_capacity(mut self, capacity: i32) -> Self {
        self.daily_capacity = capacity;
        self
    }

    /// Sets the working-day names.
    pub fn with_working_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.working_days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Capacity with the minimum of 1 enforced.
    #[inline]
    pub fn effective_capacity(&self) -> usize {
        self.daily_capacity.max(1) as usize
    }
}
