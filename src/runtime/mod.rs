//! Machine runtime.
//!
//! A [`Machine`] pairs a shared, read-only transition table with a private
//! current state. Every move is checked against the table before it happens;
//! a rejected move leaves the machine untouched.

mod error;
mod machine;

pub use error::TransitionError;
pub use machine::Machine;
