//! Builder API for declaring transition graphs.
//!
//! A [`Blueprint`] collects edges and a start state. Edges are declared with
//! the chain `blueprint.from(a).to(b)?`, which commits the edge the moment
//! both endpoints are known, or assembled separately with a
//! [`TransitionBuilder`] and added in one step.

mod blueprint;
pub mod config;
pub mod error;
pub mod macros;
mod transition;

pub use blueprint::Blueprint;
pub use config::{BlueprintConfig, TransitionConfig};
pub use error::BuildError;
pub use transition::{Committed, FromDeclaration, ToDeclaration, TransitionBuilder};
