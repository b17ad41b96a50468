//! Symptom models.

use serde::{Deserialize, Serialize};

/// A pickable symptom from the symptom catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Symptom {
    /// Unique identifier (e.g., "s1")
    pub id: String,
    /// Display name, also the string used for matching
    pub name: String,
    /// Optional explanatory text shown in the picker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Symptom {
    /// Create a symptom with no description.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Symptoms chosen during the current session, unique by id.
///
/// Iteration follows insertion order so the picker can display selections
/// in the order the user made them. Scoring ignores the order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectedSymptoms {
    items: Vec<Symptom>,
}

impl SelectedSymptoms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symptom. Returns `false` if one with the same id is already selected.
    pub fn insert(&mut self, symptom: Symptom) -> bool {
        if self.contains(&symptom.id) {
            return false;
        }
        self.items.push(symptom);
        true
    }

    /// Remove the symptom with the given id.
    pub fn remove(&mut self, id: &str) -> Option<Symptom> {
        let pos = self.items.iter().position(|s| s.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.items.iter()
    }

    /// Display names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn as_slice(&self) -> &[Symptom] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<Symptom> {
        self.items.clone()
    }
}

impl FromIterator<Symptom> for SelectedSymptoms {
    fn from_iter<I: IntoIterator<Item = Symptom>>(iter: I) -> Self {
        let mut set = Self::new();
        for symptom in iter {
            set.insert(symptom);
        }
        set
    }
}
