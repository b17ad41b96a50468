//! Static disease and symptom catalog.
//!
//! The catalog is configuration data: built once at startup (either the
//! reference data or a JSON file) and never mutated afterwards.

mod diseases;
mod symptoms;

pub use diseases::reference_diseases;
pub use symptoms::reference_symptoms;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strsim::{jaro_winkler, normalized_levenshtein};
use thiserror::Error;

use crate::models::{Disease, SelectedSymptoms, Symptom};

/// Minimum similarity for a "did you mean" suggestion.
const MIN_SUGGESTION_SIMILARITY: f64 = 0.70;

/// Catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate disease id: {0}")]
    DuplicateDisease(String),

    #[error("Duplicate symptom id: {0}")]
    DuplicateSymptom(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only list of diseases plus the symptoms offered in the picker.
///
/// Entries are never scored and ids are unique.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Catalog {
    diseases: Vec<Disease>,
    symptoms: Vec<Symptom>,
}

/// On-disk shape of a catalog, before validation.
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    diseases: Vec<Disease>,
    #[serde(default)]
    symptoms: Vec<Symptom>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// Any confidence score on the given diseases is dropped.
    pub fn new(mut diseases: Vec<Disease>, symptoms: Vec<Symptom>) -> CatalogResult<Self> {
        for disease in &mut diseases {
            disease.confidence_score = None;
        }
        let catalog = Self { diseases, symptoms };
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    /// The built-in reference catalog.
    pub fn reference() -> Self {
        Self {
            diseases: reference_diseases(),
            symptoms: reference_symptoms(),
        }
    }

    /// Parse a catalog from `{"diseases": [...], "symptoms": [...]}`.
    ///
    /// Any `confidence_score` present in the input is dropped.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let catalog = Self::new(raw.diseases, raw.symptoms)?;
        tracing::info!(
            diseases = catalog.diseases.len(),
            symptoms = catalog.symptoms.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn disease(&self, id: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.id == id)
    }

    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    /// Case-insensitive exact lookup by display name.
    pub fn symptom_by_name(&self, name: &str) -> Option<&Symptom> {
        let needle = name.trim().to_lowercase();
        self.symptoms
            .iter()
            .find(|s| s.name.to_lowercase() == needle)
    }

    /// Picker filter: unselected symptoms whose name contains `query`.
    pub fn search_symptoms<'a>(
        &'a self,
        query: &str,
        exclude: &SelectedSymptoms,
    ) -> Vec<&'a Symptom> {
        let needle = query.trim().to_lowercase();
        self.symptoms
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .filter(|s| !exclude.contains(&s.id))
            .collect()
    }

    /// "Did you mean" suggestions for a name that matched nothing.
    pub fn suggest_symptoms(&self, query: &str, limit: usize) -> Vec<&Symptom> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &Symptom)> = self
            .symptoms
            .iter()
            .map(|s| (similarity(&needle, &s.name.to_lowercase()), s))
            .filter(|(score, _)| *score >= MIN_SUGGESTION_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(limit).map(|(_, s)| s).collect()
    }

    fn check_unique_ids(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();
        for disease in &self.diseases {
            if !seen.insert(disease.id.as_str()) {
                return Err(CatalogError::DuplicateDisease(disease.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for symptom in &self.symptoms {
            if !seen.insert(symptom.id.as_str()) {
                return Err(CatalogError::DuplicateSymptom(symptom.id.clone()));
            }
        }
        Ok(())
    }
}

/// Jaro-Winkler for typos, blended with Levenshtein for overall similarity.
fn similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use std::io::Write;

    #[test]
    fn test_reference_lookup() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.diseases().len(), 10);
        assert_eq!(catalog.disease("d6").unwrap().name, "Pneumonia");
        assert_eq!(catalog.symptom_by_name("  FEVER ").unwrap().id, "s1");
        assert!(catalog.symptom("nope").is_none());
    }

    #[test]
    fn test_search_excludes_selected() {
        let catalog = Catalog::reference();
        let mut selected = SelectedSymptoms::new();

        let pain: Vec<&str> = catalog
            .search_symptoms("PAIN", &selected)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert!(pain.contains(&"Muscle pain"));
        assert!(pain.contains(&"Chest pain when breathing"));

        selected.insert(catalog.symptom_by_name("Muscle pain").unwrap().clone());
        let pain_after: Vec<&str> = catalog
            .search_symptoms("pain", &selected)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert!(!pain_after.contains(&"Muscle pain"));
        assert_eq!(pain_after.len(), pain.len() - 1);
    }

    #[test]
    fn test_empty_search_lists_everything_unselected() {
        let catalog = Catalog::reference();
        let selected: SelectedSymptoms =
            vec![catalog.symptoms()[0].clone()].into_iter().collect();

        let results = catalog.search_symptoms("", &selected);
        assert_eq!(results.len(), catalog.symptoms().len() - 1);
    }

    #[test]
    fn test_suggest_symptoms_for_typos() {
        let catalog = Catalog::reference();

        let suggestions = catalog.suggest_symptoms("fevr", 3);
        assert_eq!(suggestions.first().map(|s| s.name.as_str()), Some("Fever"));

        let suggestions = catalog.suggest_symptoms("sore thraot", 3);
        assert_eq!(
            suggestions.first().map(|s| s.name.as_str()),
            Some("Sore throat")
        );

        assert!(catalog.suggest_symptoms("xyzzy quux", 3).is_empty());
        assert!(catalog.suggest_symptoms("   ", 3).is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Disease::new("d1", "A", "", Severity::Low);
        let b = Disease::new("d1", "B", "", Severity::Low);
        assert!(matches!(
            Catalog::new(vec![a, b], vec![]),
            Err(CatalogError::DuplicateDisease(id)) if id == "d1"
        ));

        let s1 = Symptom::new("s1", "Fever");
        let s2 = Symptom::new("s1", "Cough");
        assert!(matches!(
            Catalog::new(vec![], vec![s1, s2]),
            Err(CatalogError::DuplicateSymptom(_))
        ));
    }

    #[test]
    fn test_new_strips_scores() {
        let scored = Disease::new("d1", "A", "", Severity::Low).with_confidence(0.5);
        let catalog = Catalog::new(vec![scored], vec![]).unwrap();
        assert_eq!(catalog.diseases()[0].confidence_score, None);
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = r#"{"symptoms": [{"id": "s1", "name": "Fever"}, {"id": "s1", "name": "Cough"}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateSymptom(id)) if id == "s1"
        ));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.diseases().is_empty());
        assert!(catalog.symptoms().is_empty());
    }

    #[test]
    fn test_from_json_file_strips_scores() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "diseases": [{{
                    "id": "x1",
                    "name": "Example",
                    "description": "Test entry",
                    "symptoms": ["Itching"],
                    "severity": "medium",
                    "confidence_score": 0.5
                }}],
                "symptoms": [{{"id": "s1", "name": "Itching"}}]
            }}"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.diseases().len(), 1);
        assert_eq!(catalog.diseases()[0].confidence_score, None);
        assert_eq!(catalog.symptoms()[0].name, "Itching");
    }
}
