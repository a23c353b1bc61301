//! Build errors for blueprints and transition builders.

use crate::core::TableError;
use thiserror::Error;

/// Errors that can occur when declaring transitions or creating machines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .machine()")]
    MissingStartState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition from state {from} to {to} is already declared")]
    DuplicateTransition { from: String, to: String },

    #[error("No transition from state {from} to {to} is declared")]
    UnknownTransition { from: String, to: String },

    #[error("Invalid blueprint configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to export blueprint configuration: {0}")]
    ExportFailed(String),
}

impl From<TableError> for BuildError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::DuplicateTransition { from, to } => {
                BuildError::DuplicateTransition { from, to }
            }
        }
    }
}
