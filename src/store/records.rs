use crate::error::{LocworkError, Result};
use crate::model::{DayType, LogEntry, RecordMap, Upsert};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: [&str; 3] = ["location", "date", "day_type"];

/// Persistent date-keyed store of day records.
///
/// On disk: a CSV file with header `location,date,day_type`, date in
/// ISO-8601, day_type as its integer code. Every mutation loads the whole
/// file, changes the in-memory map, and rewrites the whole file. There is no
/// locking; concurrent processes race and the last writer wins.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full store. A missing or empty file is an empty map. Any
    /// malformed row fails the whole load with `CorruptStore`; there is no
    /// partial recovery, and callers must not save a store they obtained by
    /// degrading a corrupt load, or the old contents are gone for good.
    pub fn load(&self) -> Result<RecordMap> {
        if !self.path.exists() {
            return Ok(RecordMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(LocworkError::Io)?;
        if content.trim().is_empty() {
            return Ok(RecordMap::new());
        }

        let mut reader = csv::Reader::from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| self.corrupt(format!("unreadable header: {e}")))?
            .clone();
        if headers != HEADER.to_vec() {
            return Err(self.corrupt(format!(
                "unexpected header '{}'",
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut map = RecordMap::new();
        for row in reader.records() {
            let row = row.map_err(|e| self.corrupt(e.to_string()))?;
            let entry = self.parse_row(&row)?;
            map.upsert(entry);
        }
        Ok(map)
    }

    /// Rewrite the whole store from `records`, one row per entry in map
    /// order. An empty map truncates the file to nothing, header included.
    pub fn save(&self, records: &RecordMap) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(LocworkError::Io)?;
            }
        }

        if records.is_empty() {
            fs::write(&self.path, "").map_err(LocworkError::Io)?;
            return Ok(());
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(HEADER)
            .map_err(|e| LocworkError::Store(e.to_string()))?;
        for entry in records.iter() {
            writer
                .write_record([
                    entry.location.clone(),
                    entry.date_key(),
                    entry.day_type.code().to_string(),
                ])
                .map_err(|e| LocworkError::Store(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| LocworkError::Store(e.to_string()))?;
        fs::write(&self.path, bytes).map_err(LocworkError::Io)?;
        Ok(())
    }

    /// Load, insert-or-replace the entry for its date, and save. Reports
    /// whether the date existed before the call. A corrupt load aborts
    /// before anything is written.
    pub fn upsert(&self, entry: LogEntry) -> Result<Upsert> {
        let mut records = self.load()?;
        let outcome = records.upsert(entry);
        self.save(&records)?;
        Ok(outcome)
    }

    fn parse_row(&self, row: &csv::StringRecord) -> Result<LogEntry> {
        if row.len() != 3 {
            return Err(self.corrupt(format!("expected 3 fields, got {}", row.len())));
        }
        let location = row[0].to_string();
        if location.is_empty() {
            return Err(self.corrupt("empty location field".to_string()));
        }

        let date = NaiveDate::parse_from_str(&row[1], "%Y-%m-%d")
            .map_err(|e| self.corrupt(format!("bad date '{}': {e}", &row[1])))?;

        let code: u8 = row[2]
            .parse()
            .map_err(|_| self.corrupt(format!("bad day_type '{}'", &row[2])))?;
        let day_type = DayType::from_code(code)
            .ok_or_else(|| self.corrupt(format!("day_type code {code} out of range")))?;

        Ok(LogEntry::new(location, date, day_type))
    }

    fn corrupt(&self, detail: String) -> LocworkError {
        LocworkError::CorruptStore {
            path: self.path.clone(),
            detail,
        }
    }
}
