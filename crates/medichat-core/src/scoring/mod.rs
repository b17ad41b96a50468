//! Symptom-overlap scoring.
//!
//! Pipeline: Normalization → Matching → Weighted scoring → Threshold → Rank → Advice

mod advice;
mod engine;
mod matcher;

pub use advice::*;
pub use engine::*;
pub use matcher::{normalize, symptoms_match};

use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::ScoringConfig;
use crate::models::{Disease, PredictionResponse, SelectedSymptoms, Symptom};

/// Prediction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    #[error("No symptoms provided")]
    NoSymptoms,
}

pub type PredictResult<T> = Result<T, PredictError>;

/// Rank `catalog` against `selected` with the default configuration.
pub fn score(selected: &[Symptom], catalog: &[Disease]) -> Vec<Disease> {
    ScoringEngine::default().score(selected, catalog)
}

/// Catalog plus engine: the unit a UI shell calls after symptom submission.
#[derive(Debug, Clone)]
pub struct Predictor {
    catalog: Catalog,
    engine: ScoringEngine,
}

impl Predictor {
    pub fn new(catalog: Catalog, config: ScoringConfig) -> Self {
        Self {
            catalog,
            engine: ScoringEngine::new(config),
        }
    }

    /// Predictor over the reference catalog with default scoring.
    pub fn reference() -> Self {
        Self::new(Catalog::reference(), ScoringConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank the catalog for the selected symptoms and attach advice.
    ///
    /// Repeated ids count once. An empty selection is a caller error, not an
    /// empty result.
    pub fn predict(&self, selected: &[Symptom]) -> PredictResult<PredictionResponse> {
        let unique: SelectedSymptoms = selected.iter().cloned().collect();
        if unique.is_empty() {
            tracing::warn!("Prediction requested with no symptoms");
            return Err(PredictError::NoSymptoms);
        }
        if unique.len() < selected.len() {
            tracing::debug!(
                dropped = selected.len() - unique.len(),
                "Ignoring repeated symptom ids"
            );
        }

        let selected = unique.as_slice();
        let ranked = self.engine.rank(selected, self.catalog.diseases());
        let response = advise(selected, ranked);

        tracing::info!(
            symptoms = selected.len(),
            results = response.diseases.len(),
            top = response.top().map(|d| d.name.as_str()).unwrap_or("-"),
            emergency = response.emergency_advice.is_some(),
            "Prediction complete"
        );

        Ok(response)
    }
}
