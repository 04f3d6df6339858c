use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::CoreError,
    statement::DEFAULT_CHILD_UNIT_COST,
    utils::{app_data_dir, ensure_dir},
};

const CONFIG_FILE: &str = "config.json";

/// Persistent shell settings. Statement data itself never touches disk;
/// only presentation and data-entry preferences are stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub child_unit_cost: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            child_unit_cost: DEFAULT_CHILD_UNIT_COST,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, CoreError> {
        Self::from_base(app_data_dir())
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Result<Self, CoreError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, CoreError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads settings; a missing file yields defaults, unreadable JSON is
    /// an error.
    pub fn load(&self) -> Result<Config, CoreError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes through a staging file so a crash mid-write cannot leave a
    /// truncated config behind.
    pub fn save(&self, config: &Config) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(config)?;
        let staged = self.path.with_extension("json.tmp");
        if let Some(parent) = staged.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&staged, json)?;
        fs::rename(&staged, &self.path)?;
        debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
