use chrono::NaiveDate;

/// Classification of a logged day.
///
/// Wire encoding (the `day_type` column of the record file):
///
/// | code | variant |
/// |------|---------|
/// | 0    | Free    |
/// | 1    | Work    |
///
/// Unknown codes are rejected on read; they are never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Free,
    Work,
}

impl DayType {
    pub fn code(self) -> u8 {
        match self {
            DayType::Free => 0,
            DayType::Work => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DayType::Free),
            1 => Some(DayType::Work),
            _ => None,
        }
    }
}

/// One day's record: where the user was, and what kind of day it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub location: String,
    pub date: NaiveDate,
    pub day_type: DayType,
}

impl LogEntry {
    pub fn new(location: impl Into<String>, date: NaiveDate, day_type: DayType) -> Self {
        Self {
            location: location.into(),
            date,
            day_type,
        }
    }

    /// The ISO-8601 date string this entry is keyed by.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Outcome of an upsert, by whether the date was already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// Date-keyed collection of log entries, at most one per date.
///
/// Iteration and on-disk order follow insertion order, not date order; an
/// updated entry keeps its original position. ISO date strings are the keys,
/// which makes lexicographic range filters chronologically correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMap {
    entries: Vec<LogEntry>,
}

impl RecordMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date_key: &str) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.date_key() == date_key)
    }

    /// Insert or replace the entry for `entry.date`.
    pub fn upsert(&mut self, entry: LogEntry) -> Upsert {
        match self.entries.iter_mut().find(|e| e.date == entry.date) {
            Some(slot) => {
                *slot = entry;
                Upsert::Updated
            }
            None => {
                self.entries.push(entry);
                Upsert::Created
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

impl FromIterator<LogEntry> for RecordMap {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        let mut map = RecordMap::new();
        for entry in iter {
            map.upsert(entry);
        }
        map
    }
}
