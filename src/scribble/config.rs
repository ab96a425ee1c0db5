//! # Configuration
//!
//! Settings live in `config.json` inside the data directory, next to the note records.
//! A missing file means defaults; a missing key means that key's default.
//!
//! | Key                    | Default | Description                                  |
//! |------------------------|---------|----------------------------------------------|
//! | `autosave_delay_ms`    | `1000`  | Quiet period before `compose` saves a draft  |
//! | `trash_retention_days` | `30`    | Trashed notes older than this are swept      |
//!
//! Values are bounded: the delay by one hour, the retention by 100 years. A hand-edited
//! file with a value outside its bounds loads with that key reset to its default.
//!
//! ## CLI Usage
//!
//! - `scribble config`: Show all values.
//! - `scribble config <key>`: Show one value.
//! - `scribble config <key> <value>`: Set and persist a value.

use crate::error::{Result, ScribbleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 1000;
const DEFAULT_RETENTION_DAYS: u32 = 30;
const MAX_AUTOSAVE_DELAY_MS: u64 = 60 * 60 * 1000;
const MAX_RETENTION_DAYS: u64 = 36_500;

pub const CONFIG_KEYS: &[&str] = &["autosave_delay_ms", "trash_retention_days"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScribbleConfig {
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,

    #[serde(default = "default_retention_days")]
    pub trash_retention_days: u32,
}

fn default_autosave_delay_ms() -> u64 {
    DEFAULT_AUTOSAVE_DELAY_MS
}

fn default_retention_days() -> u32 {
    DEFAULT_RETENTION_DAYS
}

impl Default for ScribbleConfig {
    fn default() -> Self {
        Self {
            autosave_delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
            trash_retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl ScribbleConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ScribbleError::Io)?;
        let mut config: ScribbleConfig =
            serde_json::from_str(&content).map_err(ScribbleError::Serialization)?;
        config.reset_out_of_bounds();
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ScribbleError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ScribbleError::Serialization)?;
        fs::write(config_path, content).map_err(ScribbleError::Io)?;
        Ok(())
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }

    pub fn retention(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.trash_retention_days))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "autosave_delay_ms" => Some(self.autosave_delay_ms.to_string()),
            "trash_retention_days" => Some(self.trash_retention_days.to_string()),
            _ => None,
        }
    }

    /// Set a key from its textual value. Both keys take positive integers up to
    /// their bound.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "autosave_delay_ms" => {
                self.autosave_delay_ms = parse_bounded(key, value, MAX_AUTOSAVE_DELAY_MS)?
            }
            "trash_retention_days" => {
                let days = parse_bounded(key, value, MAX_RETENTION_DAYS)?;
                self.trash_retention_days = u32::try_from(days).map_err(|_| {
                    ScribbleError::Config(format!("{} is too large: {}", key, value))
                })?;
            }
            _ => {
                return Err(ScribbleError::Config(format!(
                    "Unknown config key: {} (expected one of: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    fn reset_out_of_bounds(&mut self) {
        if !(1..=MAX_AUTOSAVE_DELAY_MS).contains(&self.autosave_delay_ms) {
            warn!(
                value = self.autosave_delay_ms,
                "autosave_delay_ms out of bounds, using default"
            );
            self.autosave_delay_ms = DEFAULT_AUTOSAVE_DELAY_MS;
        }
        if !(1..=MAX_RETENTION_DAYS).contains(&u64::from(self.trash_retention_days)) {
            warn!(
                value = self.trash_retention_days,
                "trash_retention_days out of bounds, using default"
            );
            self.trash_retention_days = DEFAULT_RETENTION_DAYS;
        }
    }
}

fn parse_bounded(key: &str, value: &str, max: u64) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 && n <= max => Ok(n),
        _ => Err(ScribbleError::Config(format!(
            "{} must be an integer between 1 and {}, got \"{}\"",
            key, max, value
        ))),
    }
}
