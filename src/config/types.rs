use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::ContentStore;
use crate::rotator::DEFAULT_FACT_INTERVAL;

/// Root configuration container.
///
/// Every section is optional in the file; missing keys take the defaults
/// below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rotator: RotatorConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fact rotation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotatorConfig {
    /// Milliseconds between fact changes (default: `DEFAULT_FACT_INTERVAL`).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

/// Content overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Replacement fact list. The embedded facts are used when absent.
    #[serde(default)]
    pub facts: Option<Vec<String>>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "purrfect=debug".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<data_local_dir>/purrfect/purrfect.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_interval_ms() -> u64 {
    DEFAULT_FACT_INTERVAL.as_millis() as u64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl RotatorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl ContentConfig {
    /// Build the content store, applying the fact override if any.
    pub fn content_store(&self) -> ContentStore {
        match &self.facts {
            Some(facts) => ContentStore::with_facts(facts.clone()),
            None => ContentStore::embedded(),
        }
    }
}

impl LoggingConfig {
    pub fn log_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("purrfect")
                .join("purrfect.log")
        })
    }
}
