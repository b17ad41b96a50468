//! MediChat Core Library
//!
//! Local, deterministic symptom checker: a static disease catalog and a
//! string-overlap scoring engine that turns selected symptoms into a short,
//! ranked list of candidate conditions.
//!
//! # Architecture
//!
//! ```text
//! UI shell ── selected symptoms ──► Predictor
//!                                      │
//!                       ┌──────────────▼──────────────┐
//!                       │        ScoringEngine        │
//!                       │  normalize → match → weigh  │
//!                       │  threshold → rank → top 3   │
//!                       └──────────────┬──────────────┘
//!                                      │
//!                          advice (emergency, follow-ups)
//!                                      │
//! UI shell ◄──── PredictionResponse ───┘
//! ```
//!
//! # Core Principle
//!
//! **Results are never a diagnosis.** Scores are capped below certainty and
//! every result is shown with a disclaimer.
//!
//! # Modules
//!
//! - [`catalog`]: Reference diseases and pickable symptoms
//! - [`models`]: Domain types (Symptom, Disease, PredictionResponse, etc.)
//! - [`scoring`]: Scoring engine, advice and the `Predictor` entry point
//! - [`config`]: Scoring configuration

pub mod catalog;
pub mod config;
pub mod models;
pub mod scoring;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, ScoringConfig};
pub use models::{
    ChatMessage, Disease, PredictionResponse, Role, ScoreBreakdown, ScoredDisease,
    SelectedSymptoms, Severity, Symptom,
};
pub use scoring::{score, PredictError, Predictor, ScoringEngine};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MediChatError {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<CatalogError> for MediChatError {
    fn from(e: CatalogError) -> Self {
        MediChatError::CatalogError(e.to_string())
    }
}

impl From<ConfigError> for MediChatError {
    fn from(e: ConfigError) -> Self {
        MediChatError::InvalidInput(e.to_string())
    }
}

impl From<PredictError> for MediChatError {
    fn from(e: PredictError) -> Self {
        MediChatError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for MediChatError {
    fn from(e: serde_json::Error) -> Self {
        MediChatError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open the built-in reference catalog with default scoring.
#[uniffi::export]
pub fn open_reference_catalog() -> Arc<MediChatCore> {
    Arc::new(MediChatCore {
        predictor: Predictor::reference(),
    })
}

/// Open a catalog from JSON, optionally with a JSON scoring configuration.
#[uniffi::export]
pub fn open_catalog_json(
    catalog_json: String,
    scoring_json: Option<String>,
) -> Result<Arc<MediChatCore>, MediChatError> {
    let catalog = Catalog::from_json(&catalog_json)?;
    let config = match scoring_json {
        Some(json) => ScoringConfig::from_json(&json)?,
        None => ScoringConfig::default(),
    };
    Ok(Arc::new(MediChatCore {
        predictor: Predictor::new(catalog, config),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Read-only catalog and scoring engine for FFI callers.
///
/// Holds no mutable state, so it is shared across threads without locking.
#[derive(uniffi::Object)]
pub struct MediChatCore {
    predictor: Predictor,
}

#[uniffi::export]
impl MediChatCore {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// All pickable symptoms, in display order.
    pub fn list_symptoms(&self) -> Vec<FfiSymptom> {
        self.predictor
            .catalog()
            .symptoms()
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    /// Picker search, skipping symptoms whose ids are in `exclude_ids`.
    pub fn search_symptoms(&self, query: String, exclude_ids: Vec<String>) -> Vec<FfiSymptom> {
        let catalog = self.predictor.catalog();
        let exclude: SelectedSymptoms = exclude_ids
            .iter()
            .filter_map(|id| catalog.symptom(id).cloned())
            .collect();
        catalog
            .search_symptoms(&query, &exclude)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    /// All catalog diseases, unscored.
    pub fn list_diseases(&self) -> Vec<FfiDisease> {
        self.predictor
            .catalog()
            .diseases()
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    /// Get a disease by id.
    pub fn get_disease(&self, id: String) -> Result<FfiDisease, MediChatError> {
        self.predictor
            .catalog()
            .disease(&id)
            .cloned()
            .map(Into::into)
            .ok_or(MediChatError::NotFound(id))
    }

    // =========================================================================
    // Prediction Operations
    // =========================================================================

    /// Rank diseases for the selected symptoms.
    pub fn predict(
        &self,
        symptoms: Vec<FfiSymptom>,
    ) -> Result<FfiPredictionResponse, MediChatError> {
        let selected: Vec<Symptom> = symptoms.into_iter().map(Into::into).collect();
        let response = self.predictor.predict(&selected)?;
        Ok(response.into())
    }

    /// Same as [`predict`](Self::predict), serialized as JSON.
    pub fn predict_json(&self, symptoms: Vec<FfiSymptom>) -> Result<String, MediChatError> {
        let selected: Vec<Symptom> = symptoms.into_iter().map(Into::into).collect();
        let response = self.predictor.predict(&selected)?;
        Ok(serde_json::to_string(&response)?)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe symptom.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSymptom {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<Symptom> for FfiSymptom {
    fn from(symptom: Symptom) -> Self {
        Self {
            id: symptom.id,
            name: symptom.name,
            description: symptom.description,
        }
    }
}

impl From<FfiSymptom> for Symptom {
    fn from(symptom: FfiSymptom) -> Self {
        Symptom {
            id: symptom.id,
            name: symptom.name,
            description: symptom.description,
        }
    }
}

/// FFI-safe disease. `severity` is "low", "medium" or "high".
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDisease {
    pub id: String,
    pub name: String,
    pub description: String,
    pub causes: Vec<String>,
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub prevention: Vec<String>,
    pub severity: String,
    pub confidence_score: Option<f64>,
}

impl From<Disease> for FfiDisease {
    fn from(disease: Disease) -> Self {
        Self {
            id: disease.id,
            name: disease.name,
            description: disease.description,
            causes: disease.causes,
            symptoms: disease.symptoms,
            treatments: disease.treatments,
            prevention: disease.prevention,
            severity: disease.severity.to_string(),
            confidence_score: disease.confidence_score,
        }
    }
}

/// FFI-safe prediction result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPredictionResponse {
    pub diseases: Vec<FfiDisease>,
    pub additional_questions: Vec<String>,
    pub emergency_advice: Option<String>,
}

impl From<PredictionResponse> for FfiPredictionResponse {
    fn from(response: PredictionResponse) -> Self {
        Self {
            diseases: response.diseases.into_iter().map(Into::into).collect(),
            additional_questions: response.additional_questions,
            emergency_advice: response.emergency_advice,
        }
    }
}
