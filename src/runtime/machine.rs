//! State machine that validates and performs transitions.

use crate::core::{State, TransitionTable};
use crate::runtime::error::TransitionError;
use std::sync::Arc;
use tracing::{debug, trace};

/// A running machine: a current state plus the transition table it was
/// created with.
///
/// Machines are created by [`crate::Blueprint::machine`]. Cloning a machine
/// yields another machine over the same table whose state moves
/// independently.
#[derive(Clone, Debug)]
pub struct Machine<S: State> {
    table: Arc<TransitionTable<S>>,
    current: S,
}

impl<S: State> Machine<S> {
    pub(crate) fn new(table: Arc<TransitionTable<S>>, start: S) -> Self {
        Self {
            table,
            current: start,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check whether an edge leads from the current state to `target` (pure)
    pub fn can_goto(&self, target: &S) -> bool {
        self.table.lookup_exact(&self.current, target).is_some()
    }

    pub fn cannot_goto(&self, target: &S) -> bool {
        !self.can_goto(target)
    }

    /// Check whether any edge leaves the current state (pure).
    /// A state without outgoing edges is terminal.
    pub fn has_next(&self) -> bool {
        self.table.lookup_prefix(&self.current).is_some()
    }

    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }

    /// Move to `target`.
    ///
    /// On success the current state becomes `target` and the edge's handler,
    /// if any, runs before this call returns. The handler may call `goto`
    /// again; such calls behave like any other. On failure the machine is left
    /// exactly as it was.
    pub fn goto(&mut self, target: S) -> Result<(), TransitionError> {
        let table = Arc::clone(&self.table);

        let Some(edge) = table.lookup_exact(&self.current, &target) else {
            debug!(from = %self.current.name(), to = %target.name(), "rejected illegal transition");
            return Err(TransitionError::IllegalTransition {
                from: self.current.name().into_owned(),
                to: target.name().into_owned(),
            });
        };

        trace!(from = %self.current.name(), to = %target.name(), "transitioning");
        self.current = target;

        if let Some(handler) = edge.handler() {
            handler(self);
        }

        Ok(())
    }
}
