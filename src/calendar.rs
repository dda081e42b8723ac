//! Month calendar grid, annotated from the record store.
//!
//! Pure layout and tagging only: each day cell carries a stable
//! [`DayCategory`] and an in-month flag, and the styles module in the CLI
//! decides what those look like on a terminal.

use crate::error::{LocworkError, Result};
use crate::model::{DayType, LogEntry, RecordMap};
use chrono::{Datelike, Duration, NaiveDate};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
pub const CELL_SEPARATOR: &str = " | ";

/// How a day cell should be rendered, independent of any concrete style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCategory {
    /// No record for this day.
    Default,
    /// Logged as a free day / holiday.
    Free,
    /// Logged at a location in the configured home set.
    Home,
    /// Logged at any other location.
    Office,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for padding days borrowed from the previous month.
    pub in_month: bool,
    pub category: DayCategory,
}

impl DayCell {
    /// The two-digit day number this cell displays.
    pub fn label(&self) -> String {
        format!("{:02}", self.date.day())
    }
}

/// A month laid out as whole weeks starting on Monday.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<DayCell>>,
}

/// Build the grid for `year/month`, tagging each day from `records`.
///
/// The first week is left-padded backwards with previous-month days until it
/// starts on a Monday, and the last week is filled forward with next-month
/// days, so the grid holds whole weeks only. Padding days are tagged like
/// any other day but flagged out-of-month.
pub fn month_grid(
    year: i32,
    month: u32,
    records: &RecordMap,
    home_locations: &[String],
) -> Result<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        LocworkError::InvalidDateRange(format!("{year}-{month:02} is not a calendar month"))
    })?;

    let mut days: Vec<NaiveDate> = Vec::with_capacity(37);
    let leading = first.weekday().num_days_from_monday() as i64;
    for back in (1..=leading).rev() {
        days.push(first - Duration::days(back));
    }

    let mut day = first;
    while day.month() == month {
        days.push(day);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    // fill the tail week with next-month days
    while days.len() % 7 != 0 {
        days.push(day);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    let weeks = days
        .chunks(7)
        .map(|week| {
            week.iter()
                .map(|&d| DayCell {
                    date: d,
                    in_month: d.month() == month,
                    category: categorize(records.get(&d.format("%Y-%m-%d").to_string()), home_locations),
                })
                .collect()
        })
        .collect();

    Ok(MonthGrid { year, month, weeks })
}

fn categorize(entry: Option<&LogEntry>, home_locations: &[String]) -> DayCategory {
    match entry {
        None => DayCategory::Default,
        Some(e) if e.day_type == DayType::Free => DayCategory::Free,
        Some(e) if home_locations.iter().any(|h| h == &e.location) => DayCategory::Home,
        Some(_) => DayCategory::Office,
    }
}

/// Plain-text rows: weekday header, dash separator, one row per week.
pub fn render_rows(grid: &MonthGrid) -> Vec<String> {
    let header = WEEKDAY_HEADERS.join(CELL_SEPARATOR);
    let separator = "-".repeat(header.len());

    let mut rows = vec![header, separator];
    for week in &grid.weeks {
        let cells: Vec<String> = week.iter().map(|c| c.label()).collect();
        rows.push(cells.join(CELL_SEPARATOR));
    }
    rows
}
