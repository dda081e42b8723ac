//! Interactive month-by-month stat pages.
//!
//! The viewer is a tiny state machine over a month range. It holds the full
//! record map loaded once at construction; paging back and forth never goes
//! back to disk. Key input comes through the [`KeyReader`] capability so the
//! terminal-specific reader stays a replaceable collaborator.

use crate::calendar::MonthGrid;
use crate::config::LocworkConfig;
use crate::error::Result;
use crate::model::RecordMap;
use crate::stats::{self, StatReport};
use chrono::{Duration, NaiveDate};

/// Read one interactive key. Blocks until a key arrives.
pub trait KeyReader {
    fn read_key(&mut self) -> Result<char>;
}

/// What a keypress did to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Range changed (or a recognized no-op); redraw the page.
    Redraw,
    Quit,
}

/// Everything a renderer needs for one page.
#[derive(Debug, Clone)]
pub struct StatPage {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub grid: MonthGrid,
    pub report: StatReport,
}

pub struct PagedViewer {
    records: RecordMap,
    config: LocworkConfig,
    start: NaiveDate,
    end: NaiveDate,
}

impl PagedViewer {
    /// Start on the month containing `today`.
    pub fn new(records: RecordMap, config: LocworkConfig, today: NaiveDate) -> Self {
        let (start, end) = stats::month_range(today);
        Self {
            records,
            config,
            start,
            end,
        }
    }

    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Build the page for the current range.
    pub fn page(&self) -> Result<StatPage> {
        crate::commands::stats::build_page(&self.records, &self.config, self.start)
    }

    /// Apply one key. Unrecognized keys are ignored (no redraw, no error).
    pub fn apply(&mut self, key: char) -> Option<Step> {
        match key {
            'l' => {
                self.next();
                Some(Step::Redraw)
            }
            'h' => {
                self.previous();
                Some(Step::Redraw)
            }
            'q' | '\x1b' => Some(Step::Quit),
            _ => None,
        }
    }

    fn next(&mut self) {
        let (start, end) = stats::month_range(self.end);
        self.start = start;
        self.end = end;
    }

    fn previous(&mut self) {
        let (start, end) = stats::month_range(self.start - Duration::days(1));
        self.start = start;
        self.end = end;
    }
}
