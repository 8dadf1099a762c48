use crate::error::{ReelError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORAGE_KEY: &str = "movieReviews";

/// Configuration for reelnotes, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReelConfig {
    /// Name of the slot holding the review list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Restore the example reviews whenever the stored list is found empty,
    /// not only on first use
    #[serde(default)]
    pub reseed_when_empty: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            reseed_when_empty: false,
        }
    }
}

/// Keys accepted by `reelnotes config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    StorageKey,
    ReseedWhenEmpty,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::StorageKey, ConfigKey::ReseedWhenEmpty];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::StorageKey => "storage-key",
            ConfigKey::ReseedWhenEmpty => "reseed-when-empty",
        }
    }

    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| ReelError::Config(format!("Unknown config key: {}", name)))
    }
}

impl ReelConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ReelConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::StorageKey => self.storage_key.clone(),
            ConfigKey::ReseedWhenEmpty => self.reseed_when_empty.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::StorageKey => {
                let value = value.trim();
                if value.is_empty() || value.starts_with('.') || value.contains(['/', '\\']) {
                    return Err(ReelError::Config(format!(
                        "Invalid storage key: {:?}",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            ConfigKey::ReseedWhenEmpty => {
                self.reseed_when_empty = match value.trim() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(ReelError::Config(format!(
                            "Expected true or false, got {:?}",
                            other
                        )))
                    }
                };
            }
        }
        Ok(())
    }
}
