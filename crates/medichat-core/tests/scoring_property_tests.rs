//! Property tests for the scoring engine.

use medichat_core::catalog::Catalog;
use medichat_core::models::{Disease, Severity, Symptom};
use medichat_core::scoring::{symptoms_match, Predictor, ScoringEngine};
use proptest::prelude::*;

/// Symptom names drawn from the reference picker plus a few that match nothing.
fn symptom_name() -> impl Strategy<Value = String> {
    let mut pool: Vec<String> = Catalog::reference()
        .symptoms()
        .iter()
        .map(|s| s.name.clone())
        .collect();
    pool.extend(
        ["High fever", "ache", "Foo Bar Nonexistent", "Itching", "Blurred vision"]
            .iter()
            .map(|s| s.to_string()),
    );
    prop::sample::select(pool)
}

fn selection() -> impl Strategy<Value = Vec<Symptom>> {
    prop::collection::vec(symptom_name(), 1..8).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Symptom::new(format!("p{}", i), name))
            .collect()
    })
}

fn random_catalog() -> impl Strategy<Value = Vec<Disease>> {
    prop::collection::vec(prop::collection::vec("[a-z]{1,6}( [a-z]{1,6})?", 0..6), 0..12)
        .prop_map(|profiles| {
            profiles
                .into_iter()
                .enumerate()
                .map(|(i, symptoms)| {
                    let mut d = Disease::new(format!("r{}", i), format!("R{}", i), "", Severity::Low);
                    d.symptoms = symptoms;
                    d
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn scores_stay_in_bounds(selected in selection()) {
        let catalog = Catalog::reference();
        for disease in ScoringEngine::default().score(&selected, catalog.diseases()) {
            let score = disease.confidence_score.unwrap();
            prop_assert!(score > 0.15 && score <= 0.99, "score {} out of bounds", score);
        }
    }

    #[test]
    fn results_sorted_capped_and_stable(selected in selection()) {
        let catalog = Catalog::reference();
        let result = ScoringEngine::default().score(&selected, catalog.diseases());
        prop_assert!(result.len() <= 3);

        let position = |id: &str| catalog.diseases().iter().position(|d| d.id == id).unwrap();
        for pair in result.windows(2) {
            let (a, b) = (pair[0].confidence_score.unwrap(), pair[1].confidence_score.unwrap());
            prop_assert!(a >= b);
            if a == b {
                prop_assert!(position(&pair[0].id) < position(&pair[1].id));
            }
        }
    }

    #[test]
    fn scoring_is_idempotent(selected in selection()) {
        let catalog = Catalog::reference();
        let engine = ScoringEngine::default();
        let first = serde_json::to_string(&engine.score(&selected, catalog.diseases())).unwrap();
        let second = serde_json::to_string(&engine.score(&selected, catalog.diseases())).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_overlap_means_no_results(selected in selection(), diseases in random_catalog()) {
        let overlaps = diseases.iter().any(|d| {
            selected.iter().any(|s| {
                d.symptoms
                    .iter()
                    .any(|l| symptoms_match(&s.name.to_lowercase(), &l.to_lowercase()))
            })
        });
        let result = ScoringEngine::default().score(&selected, &diseases);
        if !overlaps {
            prop_assert!(result.is_empty());
        }
        for disease in &result {
            prop_assert!(disease.confidence_score.unwrap() <= 0.99);
        }
    }

    #[test]
    fn selection_order_is_irrelevant(selected in selection()) {
        let catalog = Catalog::reference();
        let engine = ScoringEngine::default();
        let mut reversed = selected.clone();
        reversed.reverse();

        let ids = |syms: &[Symptom]| -> Vec<String> {
            engine.score(syms, catalog.diseases()).into_iter().map(|d| d.id).collect()
        };
        prop_assert_eq!(ids(&selected), ids(&reversed));
    }

    #[test]
    fn repeated_ids_are_irrelevant(
        selected in selection(),
        repeats in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let predictor = Predictor::reference();
        let mut padded = selected.clone();
        for index in &repeats {
            padded.push(index.get(&selected).clone());
        }

        prop_assert_eq!(
            predictor.predict(&padded).unwrap(),
            predictor.predict(&selected).unwrap()
        );
    }
}
