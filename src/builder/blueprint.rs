//! Blueprint: the mutable definition machines are created from.

use crate::builder::error::BuildError;
use crate::builder::transition::{FromDeclaration, ToDeclaration, TransitionBuilder};
use crate::core::{Edge, State, TransitionTable};
use crate::runtime::Machine;
use std::sync::Arc;
use tracing::debug;

/// Accumulates transition edges and a start state, then creates machines.
///
/// The table is held behind an [`Arc`]. Every machine shares the table it was
/// created with; declaring more edges afterwards copies the table, so existing
/// machines keep the snapshot they started from.
///
/// # Example
///
/// ```rust
/// use fsm_blueprint::Blueprint;
///
/// let mut blueprint = Blueprint::new();
/// blueprint.start("A");
/// blueprint.from("A").to("B")?;
/// blueprint.from("B").to("C")?.also("B")?;
///
/// let mut machine = blueprint.machine()?;
/// machine.goto("B")?;
/// assert_eq!(machine.current_state(), &"B");
/// assert!(machine.cannot_goto(&"A"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Blueprint<S: State> {
    table: Arc<TransitionTable<S>>,
    start: Option<S>,
}

impl<S: State> Blueprint<S> {
    /// Create an empty blueprint.
    pub fn new() -> Self {
        Self {
            table: Arc::new(TransitionTable::new()),
            start: None,
        }
    }

    /// Set the state new machines start in.
    ///
    /// The state does not have to appear in any transition.
    pub fn start(&mut self, state: S) -> &mut Self {
        self.start = Some(state);
        self
    }

    pub fn start_state(&self) -> Option<&S> {
        self.start.as_ref()
    }

    /// Begin declaring a transition out of `state`.
    pub fn from(&mut self, state: S) -> FromDeclaration<'_, S> {
        FromDeclaration::new(self, state)
    }

    /// Begin declaring a transition into `state`.
    pub fn to(&mut self, state: S) -> ToDeclaration<'_, S> {
        ToDeclaration::new(self, state)
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation or the edge already exists.
    pub fn add(&mut self, builder: TransitionBuilder<S>) -> Result<&mut Self, BuildError> {
        let edge = builder.build()?;
        self.insert(edge)?;
        Ok(self)
    }

    /// Commit a complete edge into the table.
    pub fn insert(&mut self, edge: Edge<S>) -> Result<(), BuildError> {
        self.commit(edge).map(|_| ())
    }

    /// Insert and return the edge's position in the table.
    pub(crate) fn commit(&mut self, edge: Edge<S>) -> Result<usize, BuildError> {
        Ok(Arc::make_mut(&mut self.table).insert(edge)?)
    }

    /// The position must come from [`commit`](Self::commit) with no insertion since.
    pub(crate) fn edge_at_mut(&mut self, position: usize) -> &mut Edge<S> {
        Arc::make_mut(&mut self.table).edge_at_mut(position)
    }

    /// Attach a handler to an already declared transition, replacing any
    /// earlier one.
    pub fn on<F>(&mut self, from: &S, to: &S, handler: F) -> Result<&mut Self, BuildError>
    where
        F: Fn(&mut Machine<S>) + Send + Sync + 'static,
    {
        let edge = self
            .edge_mut(from, to)
            .ok_or_else(|| BuildError::UnknownTransition {
                from: from.name().into_owned(),
                to: to.name().into_owned(),
            })?;
        edge.set_handler(Arc::new(handler));
        Ok(self)
    }

    pub(crate) fn edge_mut(&mut self, from: &S, to: &S) -> Option<&mut Edge<S>> {
        // Avoid copying the table when the pair is absent.
        self.table.lookup_exact(from, to)?;
        Arc::make_mut(&mut self.table).lookup_exact_mut(from, to)
    }

    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }

    /// Create a machine in the start state over the current table.
    pub fn machine(&self) -> Result<Machine<S>, BuildError> {
        let start = self.start.clone().ok_or(BuildError::MissingStartState)?;

        debug!(start = %start.name(), edges = self.table.len(), "creating machine from blueprint");
        Ok(Machine::new(Arc::clone(&self.table), start))
    }

    /// Render the edges in key order as `(A -> B) -> (B -> C)`, or `<-` when
    /// there are none.
    pub fn describe(&self) -> String {
        self.table.to_string()
    }

    /// Print [`describe`](Self::describe) to stdout.
    pub fn print(&self) {
        println!("{}", self.describe());
    }
}

impl<S: State> Default for Blueprint<S> {
    fn default() -> Self {
        Self::new()
    }
}
