use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "purrfect",
    version,
    about = "Purrfect Cat World: cat breeds, care tips and fun facts in your terminal"
)]
pub struct Cli {
    /// Config file path (default: <config dir>/purrfect/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Milliseconds between fun facts (overrides config)
    #[arg(long, value_name = "MS")]
    pub fact_interval_ms: Option<u64>,

    /// Log filter such as "debug" (overrides config; RUST_LOG still wins)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(interval_ms) = self.fact_interval_ms {
            config.rotator.interval_ms = interval_ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
