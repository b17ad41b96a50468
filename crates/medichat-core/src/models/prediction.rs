//! Prediction models produced by the scoring engine.

use serde::{Deserialize, Serialize};

use super::Disease;
use crate::config::ScoringConfig;

/// Breakdown of how a disease was scored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    /// Matched selections / disease symptom count (0.0 - 1.0)
    pub match_ratio: f64,
    /// Matched selections / selected symptom count (0.0 - 1.0)
    pub coverage_ratio: f64,
}

impl ScoreBreakdown {
    /// Weighted combination, before clamping.
    pub fn weighted_score(&self, config: &ScoringConfig) -> f64 {
        self.match_ratio * config.match_weight + self.coverage_ratio * config.coverage_weight
    }
}

/// A ranked engine result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredDisease {
    /// Catalog record copy with `confidence_score` set
    pub disease: Disease,
    /// Selected symptom names (as entered) that matched this disease
    pub matched_symptoms: Vec<String>,
    /// Ratios behind the score
    pub breakdown: ScoreBreakdown,
}

impl ScoredDisease {
    pub fn confidence(&self) -> f64 {
        self.disease.confidence_score.unwrap_or(0.0)
    }
}

/// Everything the UI shell needs to render one analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    /// Ranked diseases, highest confidence first
    pub diseases: Vec<Disease>,
    /// Follow-up questions that would help narrow the result
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_questions: Vec<String>,
    /// Present when any result requires prompt medical attention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_advice: Option<String>,
}

impl PredictionResponse {
    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    pub fn top(&self) -> Option<&Disease> {
        self.diseases.first()
    }
}
