//! Submission failures

use thiserror::Error;

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never got a response (connect, timeout, TLS, ...)
    #[error("submission request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("submission rejected with status {status}")]
    Rejected { status: u16 },
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}

/// Result delivered back to the UI loop once a request finishes
pub type SubmitOutcome = Result<(), SubmitError>;
