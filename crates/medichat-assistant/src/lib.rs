//! Conversational layer for the MediChat symptom checker.
//!
//! This crate wraps the scoring engine in a chat: it sniffs free text for
//! symptom keywords, keeps the session state a UI renders, and runs
//! predictions behind a background worker so the shell stays responsive.

pub mod config;
pub mod intent;
pub mod replies;
pub mod session;
pub mod worker;

pub use config::AssistantConfig;
pub use intent::{detect_intent, mentions_symptoms, Intent};
pub use session::{ChatSession, Completion, SessionError, Submission, Ticket};
pub use worker::{PredictionProgress, PredictionWorker, PredictionWorkerHandle};
