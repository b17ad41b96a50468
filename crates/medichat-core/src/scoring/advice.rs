//! Emergency advice and follow-up questions for a ranked result.

use std::collections::HashSet;

use crate::models::{PredictionResponse, ScoredDisease, Symptom};

use super::matcher::normalize;

/// Shown whenever a high-severity disease is among the results.
pub const EMERGENCY_ADVICE: &str = "Some of the potential conditions identified require prompt medical attention. Please consult a healthcare provider as soon as possible.";

/// Below this top score, follow-up questions are offered.
const FOLLOW_UP_BELOW: f64 = 0.7;

/// How many leading diseases contribute follow-up questions.
const FOLLOW_UP_DISEASES: usize = 2;

/// Maximum number of follow-up questions.
const MAX_QUESTIONS: usize = 3;

/// Attach emergency advice and follow-up questions to a ranked result.
pub fn advise(selected: &[Symptom], ranked: Vec<ScoredDisease>) -> PredictionResponse {
    let emergency_advice = ranked
        .iter()
        .any(|r| r.disease.severity.is_urgent())
        .then(|| EMERGENCY_ADVICE.to_string());

    let additional_questions = follow_up_questions(selected, &ranked);

    PredictionResponse {
        diseases: ranked.into_iter().map(|r| r.disease).collect(),
        additional_questions,
        emergency_advice,
    }
}

/// Ask about unreported symptoms of the leading diseases when the result is ambiguous.
fn follow_up_questions(selected: &[Symptom], ranked: &[ScoredDisease]) -> Vec<String> {
    let ambiguous = ranked.len() > 1
        && ranked
            .first()
            .is_some_and(|top| top.confidence() < FOLLOW_UP_BELOW);
    if !ambiguous {
        return Vec::new();
    }

    let reported: HashSet<String> = selected.iter().map(|s| normalize(&s.name)).collect();
    let mut asked = HashSet::new();
    let mut questions = Vec::new();

    for scored in ranked.iter().take(FOLLOW_UP_DISEASES) {
        for symptom in &scored.disease.symptoms {
            let symptom = normalize(symptom);
            if reported.contains(&symptom) || !asked.insert(symptom.clone()) {
                continue;
            }
            questions.push(format!("Are you experiencing {}?", symptom));
            if questions.len() == MAX_QUESTIONS {
                return questions;
            }
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Disease, ScoreBreakdown, Severity};

    fn scored(id: &str, severity: Severity, symptoms: &[&str], confidence: f64) -> ScoredDisease {
        let mut disease = Disease::new(id, id, "", severity);
        disease.symptoms = symptoms.iter().map(|s| s.to_string()).collect();
        ScoredDisease {
            disease: disease.with_confidence(confidence),
            matched_symptoms: vec![],
            breakdown: ScoreBreakdown {
                match_ratio: 0.0,
                coverage_ratio: 0.0,
            },
        }
    }

    #[test]
    fn test_emergency_advice_only_for_high_severity() {
        let selected = vec![Symptom::new("s1", "Fever")];

        let calm = advise(
            &selected,
            vec![scored("a", Severity::Medium, &["Fever"], 0.9)],
        );
        assert!(calm.emergency_advice.is_none());

        let urgent = advise(
            &selected,
            vec![
                scored("a", Severity::Low, &["Fever"], 0.9),
                scored("b", Severity::High, &["Fever"], 0.5),
            ],
        );
        assert_eq!(urgent.emergency_advice.as_deref(), Some(EMERGENCY_ADVICE));
    }

    #[test]
    fn test_questions_when_ambiguous() {
        let selected = vec![Symptom::new("s1", "Cough")];
        let response = advise(
            &selected,
            vec![
                scored("a", Severity::Low, &["Cough", "Congestion"], 0.6),
                scored("b", Severity::Low, &["Cough", "Congestion", "Chills", "Rash"], 0.5),
            ],
        );

        assert_eq!(
            response.additional_questions,
            vec![
                "Are you experiencing congestion?",
                "Are you experiencing chills?",
                "Are you experiencing rash?",
            ]
        );
    }

    #[test]
    fn test_no_questions_when_confident_or_single() {
        let selected = vec![Symptom::new("s1", "Cough")];

        let confident = advise(
            &selected,
            vec![
                scored("a", Severity::Low, &["Cough", "Congestion"], 0.8),
                scored("b", Severity::Low, &["Cough", "Chills"], 0.5),
            ],
        );
        assert!(confident.additional_questions.is_empty());

        let single = advise(
            &selected,
            vec![scored("a", Severity::Low, &["Cough", "Congestion"], 0.3)],
        );
        assert!(single.additional_questions.is_empty());
    }
}
