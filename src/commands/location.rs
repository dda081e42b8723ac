use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::LocationRegistry;

pub fn add(registry: &LocationRegistry, name: &str) -> Result<CmdResult> {
    registry.add(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("location '{name}' added")));
    Ok(result)
}

/// Removes the name from the registry only. Records that reference it stay
/// in the record store.
pub fn remove(registry: &LocationRegistry, name: &str) -> Result<CmdResult> {
    registry.remove(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("location '{name}' removed")));
    Ok(result)
}

pub fn list(registry: &LocationRegistry) -> Result<CmdResult> {
    let locations = registry.list()?;
    let mut result = CmdResult::default().with_locations(locations);
    if result.locations.is_empty() {
        result.add_message(CmdMessage::info("no locations added"));
    }
    Ok(result)
}
