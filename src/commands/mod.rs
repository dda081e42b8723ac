//! Command layer: pure business logic behind the CLI.
//!
//! Every command is a free function taking the stores it needs and returning
//! `Result<CmdResult>`. Nothing here writes to stdout or assumes a terminal;
//! messages come back as structured [`CmdMessage`]s for the CLI to print.

use crate::error::Result;
use crate::model::{LogEntry, RecordMap};
use crate::store::RecordStore;
use crate::viewer::StatPage;

pub mod location;
pub mod log;
pub mod stats;

/// Load the record store, degrading `CorruptStore` to an empty map with a
/// warning message on `result`. Real IO failures still propagate. Display
/// paths use this; mutation paths call `load` directly so a corrupt file is
/// never silently overwritten.
pub fn load_degraded(store: &RecordStore, result: &mut CmdResult) -> Result<RecordMap> {
    match store.load() {
        Ok(records) => Ok(records),
        Err(e) if e.is_corrupt_store() => {
            result.add_message(CmdMessage::warning(format!("{e}; showing an empty store")));
            Ok(RecordMap::new())
        }
        Err(e) => Err(e),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub locations: Vec<String>,
    pub records: Vec<LogEntry>,
    pub page: Option<StatPage>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_records(mut self, records: Vec<LogEntry>) -> Self {
        self.records = records;
        self
    }

    pub fn with_page(mut self, page: StatPage) -> Self {
        self.page = Some(page);
        self
    }
}
