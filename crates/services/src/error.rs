//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::model::QuestionError;

/// Errors emitted by `QuestionSupply`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SupplyError {
    /// A question was requested from an exhausted play queue. Callers are
    /// expected to check `is_empty` first.
    #[error("play queue is empty")]
    EmptyQueue,
}

/// Errors emitted by `GameSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for a game")]
    Empty,
    #[error("game has not been started")]
    NotStarted,
    #[error(transparent)]
    Supply(#[from] SupplyError),
}

/// Errors emitted while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question {index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
}
