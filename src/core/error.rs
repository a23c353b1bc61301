//! Errors raised by the transition table.

use thiserror::Error;

/// Errors that can occur when inserting into a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Transition from state {from} to {to} is already declared")]
    DuplicateTransition { from: String, to: String },
}
