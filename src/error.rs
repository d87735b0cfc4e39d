//! Error types for configuring rounds and building problems.

use thiserror::Error;

/// Raised when a range string or custom selection cannot be applied to a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("malformed range {0:?}, expected START-END")]
    Malformed(String),
    #[error("range {start}-{end} ends before it starts")]
    Inverted { start: usize, end: usize },
    #[error("index {index} is outside the table (len {len})")]
    OutOfBounds { index: usize, len: usize },
}

/// Raised by the checked arithmetic constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    #[error("operand {0} has no number word (supported: 0-100)")]
    OutOfRange(u32),
    #[error("{left} - {right} would be negative")]
    Negative { left: u32, right: u32 },
}

/// Raised when a round cannot be built from its settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Problem(#[from] ProblemError),
}
