use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LocworkError, Result};
use crate::model::{DayType, LogEntry, Upsert};
use crate::store::{LocationRegistry, RecordStore};
use chrono::NaiveDate;

/// Record where the user was on `date`. The location must already be in the
/// registry; the store itself does not check.
pub fn add(
    registry: &LocationRegistry,
    store: &RecordStore,
    location: &str,
    date: NaiveDate,
    day_type: DayType,
) -> Result<CmdResult> {
    let known = registry.list()?;
    if !known.iter().any(|l| l == location) {
        return Err(LocworkError::UnknownLocation(location.to_string()));
    }

    let entry = LogEntry::new(location, date, day_type);
    let key = entry.date_key();
    let outcome = store.upsert(entry)?;

    let mut result = CmdResult::default();
    let verb = match outcome {
        Upsert::Created => "added",
        Upsert::Updated => "replaced",
    };
    result.add_message(CmdMessage::success(format!(
        "{verb} record: {key}, {location}"
    )));
    Ok(result)
}

/// Dump the records in store order. A corrupt file degrades to an empty
/// listing with the error surfaced as a warning.
pub fn list(store: &RecordStore) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let records = super::load_degraded(store, &mut result)?;
    let mut result = result.with_records(records.iter().cloned().collect());
    if result.records.is_empty() && result.messages.is_empty() {
        result.add_message(CmdMessage::info("no records yet"));
    }
    Ok(result)
}
