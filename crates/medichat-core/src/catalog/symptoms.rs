//! Pickable symptom list.

use crate::models::Symptom;

/// (id, name, description)
const REFERENCE_SYMPTOMS: &[(&str, &str, Option<&str>)] = &[
    ("s1", "Fever", Some("Body temperature above 38°C / 100.4°F")),
    ("s2", "Cough", None),
    ("s3", "Sore throat", None),
    ("s4", "Runny nose", None),
    ("s5", "Congestion", Some("Blocked or stuffy nose")),
    ("s6", "Sneezing", None),
    ("s7", "Headache", None),
    ("s8", "Fatigue", Some("Unusual tiredness or lack of energy")),
    ("s9", "Chills", None),
    ("s10", "Muscle pain", None),
    ("s11", "Shortness of breath", Some("Difficulty breathing or feeling winded")),
    ("s12", "Loss of taste or smell", None),
    ("s13", "Nausea", None),
    ("s14", "Vomiting", None),
    ("s15", "Diarrhea", None),
    ("s16", "Abdominal cramps", None),
    ("s17", "Abdominal swelling", None),
    ("s18", "Loss of appetite", None),
    ("s19", "Chest pain when breathing", None),
    ("s20", "Confusion", None),
    ("s21", "Dizziness", None),
    ("s22", "Nosebleeds", None),
    ("s23", "Flushing", Some("Sudden reddening of the face or neck")),
    ("s24", "Pulsating pain", Some("Throbbing pain, often in the head")),
    ("s25", "Sensitivity to light", None),
    ("s26", "Visual disturbances", Some("Blurred vision, flashes or blind spots")),
    ("s27", "Pain when urinating", None),
    ("s28", "Frequent urination", None),
    ("s29", "Cloudy urine", None),
    ("s30", "Pelvic pain", None),
    ("s31", "Neck pain", None),
    ("s32", "Pain that worsens with movement", None),
];

/// The reference symptom picker entries, in display order.
pub fn reference_symptoms() -> Vec<Symptom> {
    REFERENCE_SYMPTOMS
        .iter()
        .map(|&(id, name, description)| {
            let symptom = Symptom::new(id, name);
            match description {
                Some(description) => symptom.with_description(description),
                None => symptom,
            }
        })
        .collect()
}
