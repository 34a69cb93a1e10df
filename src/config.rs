//! Tour timing and presentation settings.
//!
//! The binaries always run with [`TourConfig::default`]; parsing exists so
//! tests and embedders can shorten the delays without touching the demos.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::TourError;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    /// How long a guarded task holds the lock while "working".
    pub work_millis: u64,
    /// How long the caller lingers after detaching the second worker.
    pub grace_millis: u64,
    pub log_level: String,
    pub color: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        TourConfig {
            work_millis: 3_000,
            grace_millis: 5_000,
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, TourError> {
        let config: TourConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, TourError> {
        let content = fs::read_to_string(path).map_err(|source| TourError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), TourError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(TourError::invalid_config(
                "log_level",
                format!("expected one of {}, got '{}'", LOG_LEVELS.join("|"), self.log_level),
            ));
        }
        Ok(())
    }

    pub fn work_duration(&self) -> Duration {
        Duration::from_millis(self.work_millis)
    }

    pub fn grace_duration(&self) -> Duration {
        Duration::from_millis(self.grace_millis)
    }

    /// Fast timings for tests: the grace period still outlasts the work.
    pub fn quick() -> Self {
        TourConfig {
            work_millis: 50,
            grace_millis: 400,
            color: false,
            ..TourConfig::default()
        }
    }
}
