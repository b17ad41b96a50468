//! Assistant reply texts.
//!
//! Every assistant message in the transcript comes from here, so the wording
//! can be reviewed in one place.

/// First message of a new session.
pub const GREETING: &str = "Hi there! I'm MediChat, an AI assistant that can help you understand potential causes for your symptoms. Please describe what you're experiencing, and I'll do my best to provide information. Remember, this is not a replacement for professional medical advice.";

/// First message after a reset.
pub const RESTART: &str = "Let's start a new assessment. Please describe what symptoms you're experiencing, and I'll do my best to provide information.";

/// Sent when free text looks like a symptom description.
pub const SYMPTOM_PICKER_PROMPT: &str = "I noticed you mentioned some symptoms. To help me better understand your condition, could you please select all the symptoms you're experiencing from the list below?";

/// Sent for any other free text.
pub const FALLBACK: &str = "I'm here to help with medical symptom assessment. Could you please describe any symptoms you're experiencing?";

/// Sent when scoring fails. No partial result accompanies it.
pub const ANALYSIS_FAILED: &str = "I'm sorry, but I encountered an error while analyzing your symptoms. Please try again later.";

/// Shown alongside every result list.
pub const DISCLAIMER: &str = "This is not a medical diagnosis. The information provided is for educational purposes only. Always consult with a healthcare professional for proper diagnosis and treatment.";

/// Shown when no condition cleared the relevance threshold.
pub const NO_MATCHES: &str = "None of the conditions I know about match those symptoms closely. If you are worried, please contact a healthcare provider.";

/// User message summarizing a submission.
pub fn symptoms_submitted(names: &[&str]) -> String {
    format!("My symptoms are: {}", names.join(", "))
}

/// Assistant message introducing the results.
pub fn analysis_complete(names: &[&str]) -> String {
    format!(
        "Based on the symptoms you've reported ({}), I've analyzed possible conditions that might be related. Please review the information below, and remember that this is not a diagnosis.",
        names.join(", ")
    )
}

/// A phone line listed in the emergency resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyContact {
    pub service: &'static str,
    pub number: &'static str,
    pub region: &'static str,
}

pub const EMERGENCY_NOTICE: &str = "If you are experiencing a medical emergency, please call emergency services immediately or go to your nearest emergency room.";

pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        service: "Emergency Services",
        number: "911",
        region: "United States",
    },
    EmergencyContact {
        service: "Poison Control",
        number: "(800) 222-1222",
        region: "United States",
    },
    EmergencyContact {
        service: "Suicide Prevention Lifeline",
        number: "988",
        region: "United States",
    },
];

/// Warning signs that call for immediate help.
pub const WARNING_SIGNS: &[&str] = &[
    "Difficulty breathing or shortness of breath",
    "Chest pain or pressure",
    "Severe bleeding or wounds",
    "Sudden severe headache with no known cause",
    "Sudden confusion, trouble speaking or understanding speech",
    "Sudden numbness or weakness of face, arm or leg",
];

/// Shown on results whose severity is high.
pub const URGENT_RESULT: &str = "This condition may require immediate medical attention. Please consult a healthcare professional as soon as possible.";
