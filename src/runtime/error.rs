//! Errors raised while driving a machine.

use thiserror::Error;

/// Errors that can occur during transitions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("can't transition from state {from} to {to}")]
    IllegalTransition { from: String, to: String },
}
