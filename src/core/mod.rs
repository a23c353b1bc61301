//! Core state machine types.
//!
//! This module contains the transition registry every machine consults:
//! - State identifiers via the `State` trait
//! - Committed transition edges and their handlers
//! - The sorted `TransitionTable` with exact and prefix lookup

mod edge;
mod error;
mod state;
mod table;

pub use edge::{Edge, Handler};
pub use error::TableError;
pub use state::State;
pub use table::TransitionTable;
