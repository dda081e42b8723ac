use crate::error::{LocworkError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent ordered list of known location names.
///
/// Plain text, one name per line, insertion order preserved. Names are
/// matched case-sensitively; names containing newlines are unsupported.
pub struct LocationRegistry {
    path: PathBuf,
}

impl LocationRegistry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All known locations, in the order they were added. Missing file reads
    /// as an empty registry.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(LocworkError::Io)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Append a new location. Fails with `AlreadyExists` on an exact
    /// duplicate; the registry on disk is untouched in that case.
    pub fn add(&self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LocworkError::Store(
                "location name cannot be empty".to_string(),
            ));
        }

        let mut locations = self.list()?;
        if locations.iter().any(|l| l == name) {
            return Err(LocworkError::AlreadyExists(name.to_string()));
        }

        locations.push(name.to_string());
        self.write(&locations)
    }

    /// Remove a location. Fails with `NotFound` when absent. Records in the
    /// record store that reference the name are left alone.
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut locations = self.list()?;
        let Some(pos) = locations.iter().position(|l| l == name) else {
            return Err(LocworkError::NotFound(name.to_string()));
        };

        locations.remove(pos);
        self.write(&locations)
    }

    fn write(&self, locations: &[String]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(LocworkError::Io)?;
            }
        }
        fs::write(&self.path, locations.join("\n")).map_err(LocworkError::Io)?;
        Ok(())
    }
}
