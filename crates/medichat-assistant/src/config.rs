//! Assistant configuration.
//!
//! Sources, lowest to highest precedence: defaults, JSON file, environment
//! (`MEDICHAT_*`), command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use medichat_core::config::{ConfigError, ConfigResult, ScoringConfig};
use medichat_core::{Catalog, CatalogError};
use serde::{Deserialize, Serialize};

pub const ENV_REPLY_DELAY_MS: &str = "MEDICHAT_REPLY_DELAY_MS";
pub const ENV_PREDICTION_DELAY_MS: &str = "MEDICHAT_PREDICTION_DELAY_MS";
pub const ENV_CATALOG: &str = "MEDICHAT_CATALOG";

/// Simulated "typing" pause before a free-text reply.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

/// Simulated analysis time before results arrive.
pub const DEFAULT_PREDICTION_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
    pub prediction_delay_ms: u64,
    /// Custom catalog JSON; the reference catalog when unset
    pub catalog_path: Option<PathBuf>,
    pub scoring: ScoringConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            prediction_delay_ms: DEFAULT_PREDICTION_DELAY_MS,
            catalog_path: None,
            scoring: ScoringConfig::default(),
        }
    }
}

impl AssistantConfig {
    /// Load and validate a JSON file. Missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json)?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply `MEDICHAT_*` overrides read through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_REPLY_DELAY_MS) {
            self.reply_delay_ms = parse_millis(ENV_REPLY_DELAY_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_PREDICTION_DELAY_MS) {
            self.prediction_delay_ms = parse_millis(ENV_PREDICTION_DELAY_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_CATALOG) {
            if !value.trim().is_empty() {
                self.catalog_path = Some(PathBuf::from(value));
            }
        }
        Ok(self)
    }

    /// Remove all simulated latency.
    pub fn without_delays(mut self) -> Self {
        self.reply_delay_ms = 0;
        self.prediction_delay_ms = 0;
        self
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn prediction_delay(&self) -> Duration {
        Duration::from_millis(self.prediction_delay_ms)
    }

    /// The configured catalog, or the reference catalog.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::reference()),
        }
    }
}

fn parse_millis(key: &'static str, value: &str) -> ConfigResult<u64> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        reason: format!("expected milliseconds, got {:?}", value),
    })
}
