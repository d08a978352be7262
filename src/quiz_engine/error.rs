//! Error types for the bank, the session and question sources.

use thiserror::Error;

use crate::quiz_engine::models::{EntryId, RecordDefect, SessionState};

/// Errors emitted by `QuestionBank`.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank input is empty")]
    EmptyInput,
    #[error("question {position} is malformed: {defect}")]
    InvalidRecord { position: usize, defect: RecordDefect },
    #[error("question bank is exhausted")]
    EmptyBank,
    #[error("bank entry {0} not found")]
    NotFound(EntryId),
}

impl BankError {
    /// True for the load-time failures (empty or malformed input).
    pub fn is_invalid_bank(&self) -> bool {
        matches!(self, BankError::EmptyInput | BankError::InvalidRecord { .. })
    }
}

/// Errors emitted while loading question data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("failed to read question file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("choice {index} is out of range for {choices} choice(s)")]
    InvalidChoice { index: usize, choices: usize },
    #[error("{operation} is not allowed while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Source(#[from] SourceError),
}
