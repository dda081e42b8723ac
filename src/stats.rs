//! Aggregate statistics over a date range of the record store.

use crate::error::{LocworkError, Result};
use crate::model::RecordMap;
use chrono::{Datelike, Duration, NaiveDate};

/// Occurrence count for one location within a filtered range.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
    /// Share of logged days, in percent. Logged days, not calendar days:
    /// two records in a 30-day month still split 100% between them.
    pub percent: f64,
}

/// Statistics for a date range (inclusive start, exclusive end).
#[derive(Debug, Clone, PartialEq)]
pub struct StatReport {
    /// Per-location counts, descending by count; ties keep the order the
    /// locations were first seen in the store.
    pub locations: Vec<LocationCount>,
    /// Mon-Fri days in the range.
    pub weekdays: i64,
    pub logged_days: i64,
    /// weekdays - logged_days. Goes negative when weekend days are logged;
    /// kept signed on purpose rather than clamped.
    pub unlogged_days: i64,
}

/// Keep the entries with `start <= date < end`.
///
/// Comparison is lexicographic on the ISO date keys, which orders the same
/// as the dates themselves.
pub fn filter_range(records: &RecordMap, start: NaiveDate, end: NaiveDate) -> RecordMap {
    let start_key = start.format("%Y-%m-%d").to_string();
    let end_key = end.format("%Y-%m-%d").to_string();
    records
        .iter()
        .filter(|e| {
            let key = e.date_key();
            start_key <= key && key < end_key
        })
        .cloned()
        .collect()
}

/// Aggregate the already-filtered `records` against the calendar range
/// `[start, end)`. Fails with `InvalidDateRange` when `start >= end`. An
/// empty record set is fine: it yields no location rows (so no percentage is
/// ever computed from zero) and a zero logged-day count.
pub fn aggregate(records: &RecordMap, start: NaiveDate, end: NaiveDate) -> Result<StatReport> {
    if start >= end {
        return Err(LocworkError::InvalidDateRange(format!(
            "start {start} is not before end {end}"
        )));
    }

    // discovery-ordered counts
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in records.iter() {
        match counts.iter_mut().find(|(loc, _)| loc == &entry.location) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.location.clone(), 1)),
        }
    }
    let logged_days = records.len() as i64;

    let mut locations: Vec<LocationCount> = counts
        .into_iter()
        .map(|(location, count)| LocationCount {
            location,
            count,
            percent: count as f64 / logged_days as f64 * 100.0,
        })
        .collect();
    locations.sort_by(|a, b| b.count.cmp(&a.count));

    let mut weekdays = 0;
    let mut day = start;
    while day < end {
        if day.weekday().num_days_from_monday() < 5 {
            weekdays += 1;
        }
        day += Duration::days(1);
    }

    Ok(StatReport {
        locations,
        weekdays,
        logged_days,
        unlogged_days: weekdays - logged_days,
    })
}

/// The month range containing `day`: first of the month through the first of
/// the following month (exclusive).
pub fn month_range(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(day.year(), day.month(), 1)
        .unwrap_or(day);
    let end = if day.month() == 12 {
        NaiveDate::from_ymd_opt(day.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1)
    }
    .unwrap_or(start);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayType, LogEntry};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(loc: &str, d: NaiveDate) -> LogEntry {
        LogEntry::new(loc, d, DayType::Work)
    }

    #[test]
    fn filter_is_inclusive_start_exclusive_end() {
        let records: RecordMap = [
            entry("a", date(2025, 6, 30)),
            entry("b", date(2025, 7, 1)),
            entry("c", date(2025, 7, 31)),
            entry("d", date(2025, 8, 1)),
        ]
        .into_iter()
        .collect();

        let filtered = filter_range(&records, date(2025, 7, 1), date(2025, 8, 1));
        let kept: Vec<_> = filtered.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(kept, vec!["b", "c"]);
    }

    #[test]
    fn two_locations_split_fifty_fifty() {
        let records: RecordMap = [
            entry("home", date(2025, 7, 1)),
            entry("work", date(2025, 7, 2)),
        ]
        .into_iter()
        .collect();

        let report = aggregate(&records, date(2025, 7, 1), date(2025, 7, 3)).unwrap();
        assert_eq!(report.locations.len(), 2);
        for lc in &report.locations {
            assert_eq!(lc.count, 1);
            assert!((lc.percent - 50.0).abs() < f64::EPSILON);
        }
        assert_eq!(report.logged_days, 2);
    }

    #[test]
    fn ordering_is_descending_with_stable_ties() {
        let records: RecordMap = [
            entry("rarely", date(2025, 7, 1)),
            entry("often", date(2025, 7, 2)),
            entry("often", date(2025, 7, 3)),
            entry("also-once", date(2025, 7, 4)),
        ]
        .into_iter()
        .collect();

        let report = aggregate(&records, date(2025, 7, 1), date(2025, 8, 1)).unwrap();
        let names: Vec<_> = report.locations.iter().map(|l| l.location.as_str()).collect();
        assert_eq!(names, vec!["often", "rarely", "also-once"]);
    }

    #[test]
    fn empty_set_yields_no_location_rows() {
        let report = aggregate(&RecordMap::new(), date(2025, 7, 1), date(2025, 8, 1)).unwrap();
        assert!(report.locations.is_empty());
        assert_eq!(report.logged_days, 0);
        assert_eq!(report.weekdays, 23); // July 2025
        assert_eq!(report.unlogged_days, 23);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = aggregate(&RecordMap::new(), date(2025, 8, 1), date(2025, 7, 1)).unwrap_err();
        assert!(matches!(err, LocworkError::InvalidDateRange(_)));

        let same = aggregate(&RecordMap::new(), date(2025, 7, 1), date(2025, 7, 1));
        assert!(same.is_err());
    }

    #[test]
    fn weekend_logging_can_drive_unlogged_negative() {
        // the single weekend of the range is fully logged
        let records: RecordMap = [
            entry("home", date(2025, 7, 5)),
            entry("home", date(2025, 7, 6)),
        ]
        .into_iter()
        .collect();

        let report = aggregate(&records, date(2025, 7, 5), date(2025, 7, 7)).unwrap();
        assert_eq!(report.weekdays, 0);
        assert_eq!(report.unlogged_days, -2);
    }

    #[test]
    fn month_range_covers_first_to_next_first() {
        assert_eq!(
            month_range(date(2025, 7, 15)),
            (date(2025, 7, 1), date(2025, 8, 1))
        );
        assert_eq!(
            month_range(date(2025, 12, 31)),
            (date(2025, 12, 1), date(2026, 1, 1))
        );
    }
}
