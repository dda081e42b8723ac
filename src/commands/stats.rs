use crate::calendar;
use crate::commands::{load_degraded, CmdResult};
use crate::config::LocworkConfig;
use crate::error::Result;
use crate::model::RecordMap;
use crate::stats;
use crate::store::RecordStore;
use crate::viewer::StatPage;
use chrono::{Datelike, NaiveDate};

/// Build the stat page for the month containing `day`.
///
/// A corrupt record file degrades to an empty store with a warning; the page
/// still renders so the user can see the calendar.
pub fn page_for_month(store: &RecordStore, config: &LocworkConfig, day: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let records = load_degraded(store, &mut result)?;
    let page = build_page(&records, config, day)?;
    Ok(result.with_page(page))
}

/// Pure page assembly from an already-loaded map.
pub fn build_page(records: &RecordMap, config: &LocworkConfig, day: NaiveDate) -> Result<StatPage> {
    let (start, end) = stats::month_range(day);
    let filtered = stats::filter_range(records, start, end);
    let grid = calendar::month_grid(start.year(), start.month(), &filtered, &config.home_locations)?;
    let report = stats::aggregate(&filtered, start, end)?;
    Ok(StatPage {
        start,
        end,
        grid,
        report,
    })
}
