//! Disease catalog models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Urgency classification of a disease, used for display emphasis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Lowercase label as stored in catalog JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Whether results of this severity call for prompt medical attention.
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// A disease record.
///
/// Catalog entries never carry a `confidence_score`; the scoring engine
/// returns copies with the score attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Disease {
    /// Unique identifier (e.g., "d1")
    pub id: String,
    /// Display name
    pub name: String,
    /// Short plain-language description
    pub description: String,
    /// Known causes
    #[serde(default)]
    pub causes: Vec<String>,
    /// Known symptoms, matched against user selections
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Common treatments
    #[serde(default)]
    pub treatments: Vec<String>,
    /// Prevention measures
    #[serde(default)]
    pub prevention: Vec<String>,
    /// Urgency tag
    #[serde(alias = "emergency_level", alias = "emergencyLevel")]
    pub severity: Severity,
    /// Heuristic relevance in [0, 0.99], set only on engine output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
}

impl Disease {
    /// Create a disease with required fields and empty lists.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            causes: Vec::new(),
            symptoms: Vec::new(),
            treatments: Vec::new(),
            prevention: Vec::new(),
            severity,
            confidence_score: None,
        }
    }

    /// Copy of this record with a confidence score attached.
    pub fn with_confidence(&self, score: f64) -> Self {
        Self {
            confidence_score: Some(score),
            ..self.clone()
        }
    }

    /// Score as a whole percentage, if scored.
    pub fn confidence_percent(&self) -> Option<u32> {
        self.confidence_score.map(|s| (s * 100.0).round() as u32)
    }
}
