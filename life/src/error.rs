//! Error types.
//!
//! Stepping a [`LiveSet`](crate::LiveSet) cannot fail; these cover the
//! plaintext parser and the task-based stepper.

use thiserror::Error;

/// Plaintext pattern parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that is neither alive (`O`, `o`, `*`) nor dead (`.`, space).
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedChar {
        line: usize,
        column: usize,
        found: char,
    },
}

/// Failure of a counting task in [`step_coro`](crate::step_coro).
#[derive(Debug, Error)]
pub enum CoroError {
    /// A worker task panicked or was cancelled.
    #[error("neighbor-count task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
