//! Disease ranking by symptom overlap.
//!
//! Scoring weights (defaults):
//! - Match ratio (disease profile covered by the selection): 60%
//! - Coverage ratio (selection explained by the disease): 40%

use crate::config::ScoringConfig;
use crate::models::{Disease, ScoreBreakdown, ScoredDisease, Symptom};

use super::matcher::{matching_indices, normalize};

/// Pure, synchronous scorer. Holds only configuration.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Create an engine. The configuration is expected to be validated.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Rank diseases for the selected symptoms.
    ///
    /// Returns at most `max_results` entries, each scoring strictly above
    /// `min_confidence`, highest first. Equal scores keep catalog order.
    pub fn rank(&self, selected: &[Symptom], diseases: &[Disease]) -> Vec<ScoredDisease> {
        let selected_names: Vec<String> = selected.iter().map(|s| normalize(&s.name)).collect();

        let mut scored: Vec<ScoredDisease> = diseases
            .iter()
            .map(|disease| self.score_disease(selected, &selected_names, disease))
            .filter(|c| c.confidence() > self.config.min_confidence)
            .collect();

        // Stable: ties keep catalog order
        scored.sort_by(|a, b| {
            b.confidence()
                .partial_cmp(&a.confidence())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.config.max_results);

        tracing::debug!(
            selected = selected.len(),
            candidates = diseases.len(),
            returned = scored.len(),
            "Ranked diseases"
        );

        scored
    }

    /// Like [`rank`](Self::rank), returning only the scored disease records.
    pub fn score(&self, selected: &[Symptom], diseases: &[Disease]) -> Vec<Disease> {
        self.rank(selected, diseases)
            .into_iter()
            .map(|s| s.disease)
            .collect()
    }

    /// Score a single disease against the normalized selection.
    fn score_disease(
        &self,
        selected: &[Symptom],
        selected_names: &[String],
        disease: &Disease,
    ) -> ScoredDisease {
        let listed: Vec<String> = disease.symptoms.iter().map(|s| normalize(s)).collect();
        let matched = matching_indices(selected_names, &listed);

        let breakdown = ScoreBreakdown {
            match_ratio: ratio(matched.len(), listed.len()),
            coverage_ratio: ratio(matched.len(), selected_names.len()),
        };
        let confidence = breakdown
            .weighted_score(&self.config)
            .min(self.config.max_confidence);

        tracing::trace!(
            disease = %disease.id,
            matched = matched.len(),
            match_ratio = breakdown.match_ratio,
            coverage_ratio = breakdown.coverage_ratio,
            confidence,
            "Scored disease"
        );

        ScoredDisease {
            disease: disease.with_confidence(confidence),
            matched_symptoms: matched.into_iter().map(|i| selected[i].name.clone()).collect(),
            breakdown,
        }
    }
}

/// `part / whole`, with an empty whole counting as no overlap.
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
