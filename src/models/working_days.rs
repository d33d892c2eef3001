//! Working-day set.
//!
//! Decides which calendar dates may receive tasks. Caller input is a list
//! of day names in whatever casing and length they chose ("Mon", "monday",
//! "FRI"); matching is by case-insensitive 3-letter prefix against the
//! English day names, resolved into an explicit `chrono::Weekday` set so
//! the rest of the crate never compares strings.
//!
//! # Defaults
//! An absent or empty input list means Mon–Fri. A non-empty list whose
//! entries are all unrecognized yields an empty set — such a set matches
//! no date at all, which is the historical contract (see
//! `DayBucketScheduler` for the consequence).

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

/// A set of working days of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDaySet {
    days: HashSet<Weekday>,
}

impl WorkingDaySet {
    /// The Mon–Fri default.
    pub fn weekdays() -> Self {
        Self {
            days: HashSet::from([
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]),
        }
    }

    /// Builds a set from explicit weekdays.
    pub fn from_weekdays<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// Normalizes caller-supplied day names.
    ///
    /// Empty input falls back to Mon–Fri. Entries are trimmed and matched
    /// by their first three characters, case-insensitively; entries that
    /// match no day are dropped without error.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        if names.is_empty() {
            return Self::weekdays();
        }
        Self {
            days: names
                .iter()
                .filter_map(|n| parse_day_name(n.as_ref()))
                .collect(),
        }
    }

    /// Whether the given weekday is a working day.
    #[inline]
    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Whether the given date falls on a working day.
    #[inline]
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// Whether the set matches no day at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of distinct working days per week.
    pub fn len(&self) -> usize {
        self.days.len()
    }
}

impl Default for WorkingDaySet {
    fn default() -> Self {
        Self::weekdays()
    }
}

/// Parses one day name by case-insensitive 3-letter prefix.
///
/// Returns `None` for entries shorter than three characters or with an
/// unrecognized prefix.
fn parse_day_name(name: &str) -> Option<Weekday> {
    let trimmed = name.trim();
    if trimmed.len() < 3 {
        return None;
    }
    let prefix = trimmed.chars().take(3).collect::<String>().to_lowercase();
    match prefix.as_str() {
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mon_fri() {
        let set = WorkingDaySet::default();
        assert_eq!(set.len(), 5);
        assert!(set.contains(Weekday::Mon));
        assert!(set.contains(Weekday::Fri));
        assert!(!set.contains(Weekday::Sat));
        assert!(!set.contains(Weekday::Sun));
    }

    #[test]
    fn test_empty_names_fall_back_to_default() {
        let set = WorkingDaySet::from_names::<&str>(&[]);
        assert_eq!(set, WorkingDaySet::weekdays());
    }

    #[test]
    fn test_prefix_and_case_insensitive() {
        let set = WorkingDaySet::from_names(&["Monday", "tue", "WED"]);
        assert!(set.contains(Weekday::Mon));
        assert!(set.contains(Weekday::Tue));
        assert!(set.contains(Weekday::Wed));
        assert!(!set.contains(Weekday::Thu));
    }

    #[test]
    fn test_whitespace_trimmed() {
        let set = WorkingDaySet::from_names(&["  Sat ", "sunDAY"]);
        assert!(set.contains(Weekday::Sat));
        assert!(set.contains(Weekday::Sun));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unrecognized_entries_dropped() {
        // All-garbage input does NOT fall back to Mon-Fri: the set is empty.
        let set = WorkingDaySet::from_names(&["xyz", "Mo", "holiday"]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_is_working_day_by_date() {
        let set = WorkingDaySet::weekdays();
        // 2025-06-02 is a Monday, 2025-06-07 a Saturday.
        assert!(set.is_working_day(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
        assert!(!set.is_working_day(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let set = WorkingDaySet::from_names(&["mon", "Monday", "MON"]);
        assert_eq!(set.len(), 1);
    }
}
