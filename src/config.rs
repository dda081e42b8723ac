use crate::error::{LocworkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for locwork, stored in the data dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocworkConfig {
    /// Locations the calendar highlights as "home" days. Everything else
    /// with a record renders as an office day.
    #[serde(default = "default_home_locations")]
    pub home_locations: Vec<String>,
}

fn default_home_locations() -> Vec<String> {
    vec!["home".to_string()]
}

impl Default for LocworkConfig {
    fn default() -> Self {
        Self {
            home_locations: default_home_locations(),
        }
    }
}

impl LocworkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LocworkError::Io)?;
        let config: LocworkConfig =
            serde_json::from_str(&content).map_err(LocworkError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LocworkError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LocworkError::Serialization)?;
        fs::write(config_path, content).map_err(LocworkError::Io)?;
        Ok(())
    }

    pub fn is_home(&self, location: &str) -> bool {
        self.home_locations.iter().any(|h| h == location)
    }
}
