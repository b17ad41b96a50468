//! Symptom matching rules.
//!
//! A selected symptom matches a disease when, after lowercasing, either
//! string contains the other. This is plain substring containment, so a
//! selection such as "ache" also matches "headache".

/// Comparable form of a symptom string.
pub fn normalize(symptom: &str) -> String {
    symptom.to_lowercase()
}

/// Bidirectional containment on already-normalized strings.
pub fn symptoms_match(selected: &str, listed: &str) -> bool {
    listed.contains(selected) || selected.contains(listed)
}

/// Indices of `selected` entries matching at least one of `listed`.
///
/// Both slices must already be normalized.
pub fn matching_indices(selected: &[String], listed: &[String]) -> Vec<usize> {
    selected
        .iter()
        .enumerate()
        .filter(|(_, s)| listed.iter().any(|l| symptoms_match(s, l)))
        .map(|(i, _)| i)
        .collect()
}
