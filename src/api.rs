//! Facade over the command layer.
//!
//! `LocworkApi` owns the stores and the config and exposes one method per
//! operation. UIs talk to this type only; it never prints and never exits.

use crate::commands::{self, CmdResult};
use crate::config::LocworkConfig;
use crate::error::Result;
use crate::model::DayType;
use crate::store::{LocationRegistry, RecordStore};
use crate::viewer::PagedViewer;
use chrono::NaiveDate;

pub struct LocworkApi {
    registry: LocationRegistry,
    store: RecordStore,
    config: LocworkConfig,
}

impl LocworkApi {
    pub fn new(registry: LocationRegistry, store: RecordStore, config: LocworkConfig) -> Self {
        Self {
            registry,
            store,
            config,
        }
    }

    pub fn config(&self) -> &LocworkConfig {
        &self.config
    }

    pub fn add_location(&self, name: &str) -> Result<CmdResult> {
        commands::location::add(&self.registry, name)
    }

    pub fn remove_location(&self, name: &str) -> Result<CmdResult> {
        commands::location::remove(&self.registry, name)
    }

    pub fn list_locations(&self) -> Result<CmdResult> {
        commands::location::list(&self.registry)
    }

    pub fn log_day(&self, location: &str, date: NaiveDate, day_type: DayType) -> Result<CmdResult> {
        commands::log::add(&self.registry, &self.store, location, date, day_type)
    }

    pub fn list_records(&self) -> Result<CmdResult> {
        commands::log::list(&self.store)
    }

    pub fn stat_page(&self, day: NaiveDate) -> Result<CmdResult> {
        commands::stats::page_for_month(&self.store, &self.config, day)
    }

    /// Load the store once and hand it to a viewer. Corrupt stores degrade
    /// to empty with the warning carried in the returned result.
    pub fn viewer(&self, today: NaiveDate) -> Result<(PagedViewer, CmdResult)> {
        let mut result = CmdResult::default();
        let records = commands::load_degraded(&self.store, &mut result)?;
        let viewer = PagedViewer::new(records, self.config.clone(), today);
        Ok((viewer, result))
    }
}
