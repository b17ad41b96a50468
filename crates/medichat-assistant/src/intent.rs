//! Free-text intent sniffing.
//!
//! No language understanding happens here: a message is routed to the
//! symptom picker when it contains one of a fixed set of keywords.

use serde::{Deserialize, Serialize};

/// Substrings that suggest the user is describing how they feel.
pub const SYMPTOM_KEYWORDS: &[&str] = &["pain", "ache", "feel", "hurt", "sore", "fever", "sick"];

/// Where a free-text message should be routed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Intent {
    /// Show the structured symptom picker
    DescribesSymptoms,
    /// Reply with the generic prompt
    Other,
}

/// Classify a free-text message.
pub fn detect_intent(text: &str) -> Intent {
    if mentions_symptoms(text) {
        Intent::DescribesSymptoms
    } else {
        Intent::Other
    }
}

/// Whether the text contains any symptom keyword (case-insensitive substring).
pub fn mentions_symptoms(text: &str) -> bool {
    let lower = text.to_lowercase();
    SYMPTOM_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// The keywords found in `text`, in keyword order.
pub fn matched_keywords(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    SYMPTOM_KEYWORDS
        .iter()
        .copied()
        .filter(|k| lower.contains(k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_symptom_messages() {
        assert_eq!(detect_intent("I have a terrible headache"), Intent::DescribesSymptoms);
        assert_eq!(detect_intent("My throat is SORE"), Intent::DescribesSymptoms);
        assert_eq!(detect_intent("I don't feel well"), Intent::DescribesSymptoms);
        assert_eq!(detect_intent("running a Fever since Monday"), Intent::DescribesSymptoms);
    }

    #[test]
    fn test_other_messages() {
        assert_eq!(detect_intent("hello there"), Intent::Other);
        assert_eq!(detect_intent(""), Intent::Other);
        assert_eq!(detect_intent("what can you do?"), Intent::Other);
    }

    #[test]
    fn test_substring_not_word_matching() {
        // "painting" contains "pain"
        assert!(mentions_symptoms("I was painting the fence"));
        assert_eq!(matched_keywords("headache and feeling hurt"), vec!["ache", "feel", "hurt"]);
    }

    proptest! {
        #[test]
        fn case_never_changes_intent(text in "[a-zA-Z ]{0,40}") {
            prop_assert_eq!(detect_intent(&text.to_uppercase()), detect_intent(&text.to_lowercase()));
        }

        #[test]
        fn embedded_keyword_always_detected(
            prefix in "[a-z ]{0,20}",
            suffix in "[a-z ]{0,20}",
            idx in 0..SYMPTOM_KEYWORDS.len(),
        ) {
            let text = format!("{}{}{}", prefix, SYMPTOM_KEYWORDS[idx], suffix);
            prop_assert_eq!(detect_intent(&text), Intent::DescribesSymptoms);
        }
    }
}
