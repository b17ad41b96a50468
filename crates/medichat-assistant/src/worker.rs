//! Background prediction worker.
//!
//! Scoring is synchronous and fast; the worker exists so a shell can show a
//! "typing" indicator during the simulated analysis delay without blocking
//! its input loop.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use medichat_core::models::PredictionResponse;
use medichat_core::Predictor;

use crate::session::{Submission, Ticket};

/// Progress updates from the prediction worker.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionProgress {
    /// Simulated analysis delay has started
    Analyzing(Ticket),
    /// Scoring finished
    Complete(Ticket, PredictionResponse),
    /// Scoring failed; no partial result
    Failed(Ticket, String),
}

impl PredictionProgress {
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::Analyzing(t) | Self::Complete(t, _) | Self::Failed(t, _) => *t,
        }
    }

    /// The outcome carried by a terminal update, in the form the session accepts.
    pub fn into_outcome(self) -> Option<(Ticket, Result<PredictionResponse, String>)> {
        match self {
            Self::Analyzing(_) => None,
            Self::Complete(t, response) => Some((t, Ok(response))),
            Self::Failed(t, error) => Some((t, Err(error))),
        }
    }
}

/// Handle to a running prediction.
pub struct PredictionWorkerHandle {
    /// Receiver for progress updates
    progress_rx: Receiver<PredictionProgress>,
    /// Thread handle (for joining)
    _handle: JoinHandle<()>,
}

impl PredictionWorkerHandle {
    /// Try to receive the next progress update (non-blocking).
    ///
    /// `Ok(None)` while the worker is busy; an error once it is gone with
    /// nothing left to read.
    pub fn try_recv(&self) -> Result<Option<PredictionProgress>, RecvError> {
        match self.progress_rx.try_recv() {
            Ok(update) => Ok(Some(update)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(RecvError),
        }
    }

    /// Block until the next progress update.
    pub fn recv(&self) -> Result<PredictionProgress, RecvError> {
        self.progress_rx.recv()
    }

    /// Block until the terminal update, skipping intermediate progress.
    pub fn wait(&self) -> Result<(Ticket, Result<PredictionResponse, String>), RecvError> {
        loop {
            if let Some(outcome) = self.recv()?.into_outcome() {
                return Ok(outcome);
            }
        }
    }
}

/// Runs a prediction in the background.
pub struct PredictionWorker;

impl PredictionWorker {
    /// Spawn a background prediction for one submission.
    ///
    /// Returns a handle to receive progress updates.
    pub fn spawn(
        predictor: Arc<Predictor>,
        submission: Submission,
        latency: Duration,
    ) -> PredictionWorkerHandle {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            Self::run_with_progress(&predictor, submission, latency, tx);
        });

        PredictionWorkerHandle {
            progress_rx: rx,
            _handle: handle,
        }
    }

    /// Run prediction with progress updates.
    fn run_with_progress(
        predictor: &Predictor,
        submission: Submission,
        latency: Duration,
        tx: Sender<PredictionProgress>,
    ) {
        let ticket = submission.ticket;
        let _ = tx.send(PredictionProgress::Analyzing(ticket));

        if !latency.is_zero() {
            thread::sleep(latency);
        }

        // A broken collaborator must surface as a failure message, not a dead channel
        let result = panic::catch_unwind(AssertUnwindSafe(|| predictor.predict(&submission.symptoms)));

        let update = match result {
            Ok(Ok(response)) => PredictionProgress::Complete(ticket, response),
            Ok(Err(e)) => PredictionProgress::Failed(ticket, e.to_string()),
            Err(_) => {
                tracing::error!(?ticket, "Prediction panicked");
                PredictionProgress::Failed(ticket, "prediction panicked".to_string())
            }
        };
        let _ = tx.send(update);
    }
}
