//! fsm-blueprint: declare finite state machines, then drive them
//!
//! A caller declares the legal transitions once on a [`Blueprint`], optionally
//! attaching a handler to each, and then creates any number of [`Machine`]s
//! from it. Each machine checks every move against the shared transition
//! table and rejects illegal ones before anything changes.
//!
//! # Core Concepts
//!
//! - **State**: any ordered identifier via the `State` trait
//! - **Transition table**: edges sorted by `(from, to)` with binary-search lookup
//! - **Blueprint**: incremental declaration of edges and the start state
//! - **Machine**: a current state gated by the table, running handlers on success
//!
//! # Example
//!
//! ```rust
//! use fsm_blueprint::{Blueprint, TransitionError};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let arrivals = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&arrivals);
//!
//! let mut blueprint = Blueprint::new();
//! blueprint.start("A");
//! blueprint
//!     .from("A")
//!     .to("B")?
//!     .then(move |_machine| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     });
//! blueprint.from("B").to("C")?;
//!
//! let mut machine = blueprint.machine()?;
//! machine.goto("B")?;
//! machine.goto("C")?;
//! assert_eq!(arrivals.load(Ordering::SeqCst), 1);
//! assert!(!machine.has_next());
//!
//! let err = machine.goto("A").unwrap_err();
//! assert_eq!(
//!     err,
//!     TransitionError::IllegalTransition { from: "C".into(), to: "A".into() }
//! );
//! assert_eq!(machine.current_state(), &"C");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod runtime;

// Re-export commonly used types
pub use builder::{Blueprint, BlueprintConfig, BuildError, TransitionBuilder};
pub use crate::core::{Edge, Handler, State, TableError, TransitionTable};
pub use runtime::{Machine, TransitionError};
