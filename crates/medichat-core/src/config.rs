//! Scoring configuration.
//!
//! Defaults reproduce the reference heuristic:
//! - Match ratio weight: 60%
//! - Coverage ratio weight: 40%
//! - Relevance threshold: strictly above 0.15
//! - Confidence cap: 0.99
//! - At most 3 results

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default weight of the match ratio.
pub const DEFAULT_MATCH_WEIGHT: f64 = 0.6;

/// Default weight of the coverage ratio.
pub const DEFAULT_COVERAGE_WEIGHT: f64 = 0.4;

/// Scores must be strictly greater than this to be reported.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.15;

/// Never claim absolute certainty.
pub const DEFAULT_MAX_CONFIDENCE: f64 = 0.99;

/// Number of results returned.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables of the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub match_weight: f64,
    pub coverage_weight: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
    pub max_results: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_weight: DEFAULT_MATCH_WEIGHT,
            coverage_weight: DEFAULT_COVERAGE_WEIGHT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_confidence: DEFAULT_MAX_CONFIDENCE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl ScoringConfig {
    /// Parse and validate a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check that the configuration keeps scores inside [0, 0.99].
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.match_weight.is_finite() && self.match_weight >= 0.0) {
            return Err(invalid("match_weight", "must be a non-negative number"));
        }
        if !(self.coverage_weight.is_finite() && self.coverage_weight >= 0.0) {
            return Err(invalid("coverage_weight", "must be a non-negative number"));
        }
        if !(self.max_confidence > 0.0 && self.max_confidence <= DEFAULT_MAX_CONFIDENCE) {
            return Err(invalid(
                "max_confidence",
                format!("must be in (0, {}]", DEFAULT_MAX_CONFIDENCE),
            ));
        }
        if !(self.min_confidence >= 0.0 && self.min_confidence < self.max_confidence) {
            return Err(invalid(
                "min_confidence",
                "must be in [0, max_confidence)".to_string(),
            ));
        }
        if self.max_results == 0 {
            return Err(invalid("max_results", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.into(),
    }
}
