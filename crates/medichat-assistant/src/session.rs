//! Chat session state.
//!
//! One `ChatSession` holds everything a UI shell renders: the transcript,
//! the symptom picker state and the latest results. Scoring itself happens
//! elsewhere; the session only hands out a [`Submission`] and later accepts
//! its outcome.

use medichat_core::models::{ChatMessage, PredictionResponse, SelectedSymptoms, Symptom};
use thiserror::Error;

use crate::intent::{detect_intent, matched_keywords, Intent};
use crate::replies;

/// Session errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("No symptoms selected")]
    NoSymptomsSelected,

    #[error("A symptom analysis is already in progress")]
    SubmissionPending,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Identifies one submission so late results from a superseded one are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A snapshot of the selection handed to the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: Ticket,
    pub symptoms: Vec<Symptom>,
}

/// What happened to a completed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Results stored and announced
    Applied,
    /// Scoring failed; apology appended
    Failed,
    /// Ticket no longer current; nothing changed
    Stale,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    selected: SelectedSymptoms,
    predictions: PredictionResponse,
    symptom_selection_active: bool,
    /// Ticket of the submission in flight, if any
    pending: Option<Ticket>,
    /// Symptom names of the submission in flight
    pending_names: Vec<String>,
    next_ticket: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// New session seeded with the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(replies::GREETING)],
            selected: SelectedSymptoms::new(),
            predictions: PredictionResponse::default(),
            symptom_selection_active: false,
            pending: None,
            pending_names: Vec::new(),
            next_ticket: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn selected_symptoms(&self) -> &SelectedSymptoms {
        &self.selected
    }

    pub fn predictions(&self) -> &PredictionResponse {
        &self.predictions
    }

    pub fn symptom_selection_active(&self) -> bool {
        self.symptom_selection_active
    }

    /// Whether a submission is in flight ("assistant is typing").
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle free text from the user and append the assistant's reply.
    ///
    /// Returns the detected intent so the shell can open the picker.
    pub fn send_message(&mut self, text: &str) -> SessionResult<Intent> {
        let text = text.trim();
        if text.is_empty() {
            tracing::warn!("Ignoring empty chat message");
            return Err(SessionError::EmptyMessage);
        }

        self.messages.push(ChatMessage::user(text));

        let intent = detect_intent(text);
        match intent {
            Intent::DescribesSymptoms => {
                self.messages
                    .push(ChatMessage::assistant(replies::SYMPTOM_PICKER_PROMPT));
                self.symptom_selection_active = true;
            }
            Intent::Other => {
                self.messages.push(ChatMessage::assistant(replies::FALLBACK));
            }
        }

        tracing::debug!(?intent, keywords = ?matched_keywords(text), "Handled chat message");
        Ok(intent)
    }

    /// Add a symptom to the selection. Returns `false` for a duplicate.
    pub fn select_symptom(&mut self, symptom: Symptom) -> bool {
        self.selected.insert(symptom)
    }

    /// Remove a symptom from the selection by id.
    pub fn remove_symptom(&mut self, id: &str) -> Option<Symptom> {
        self.selected.remove(id)
    }

    /// Start analysing the current selection.
    ///
    /// Appends the user's symptom summary and closes the picker. The
    /// selection itself is kept, as the picker shows it again afterwards.
    pub fn begin_submission(&mut self) -> SessionResult<Submission> {
        if self.pending.is_some() {
            tracing::warn!("Rejected submission while another is pending");
            return Err(SessionError::SubmissionPending);
        }
        if self.selected.is_empty() {
            return Err(SessionError::NoSymptomsSelected);
        }

        let names = self.selected.names();
        self.messages
            .push(ChatMessage::user(replies::symptoms_submitted(&names)));
        self.pending_names = names.into_iter().map(String::from).collect();

        self.symptom_selection_active = false;
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some(ticket);

        tracing::info!(symptoms = self.selected.len(), "Submitted symptoms");

        Ok(Submission {
            ticket,
            symptoms: self.selected.to_vec(),
        })
    }

    /// Record the outcome of a submission.
    pub fn complete_submission(
        &mut self,
        ticket: Ticket,
        outcome: Result<PredictionResponse, String>,
    ) -> Completion {
        if self.pending != Some(ticket) {
            tracing::debug!(?ticket, "Discarding result of superseded submission");
            return Completion::Stale;
        }
        self.pending = None;
        let names = std::mem::take(&mut self.pending_names);

        match outcome {
            Ok(response) => {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                self.messages
                    .push(ChatMessage::assistant(replies::analysis_complete(&names)));
                self.predictions = response;
                Completion::Applied
            }
            Err(error) => {
                tracing::warn!(%error, "Symptom analysis failed");
                self.messages
                    .push(ChatMessage::assistant(replies::ANALYSIS_FAILED));
                Completion::Failed
            }
        }
    }

    /// Start over: restart message only, nothing selected, no results.
    ///
    /// Any submission in flight is superseded.
    pub fn reset(&mut self) {
        self.messages = vec![ChatMessage::assistant(replies::RESTART)];
        self.selected.clear();
        self.predictions = PredictionResponse::default();
        self.symptom_selection_active = false;
        self.pending = None;
        self.pending_names.clear();
        tracing::info!("Session reset");
    }
}
