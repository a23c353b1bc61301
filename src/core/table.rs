//! Sorted registry of transition edges.
//!
//! The table is a single vector kept ordered by the `(from, to)` key. Exact
//! lookups binary search the full key; "any outgoing edge" lookups binary
//! search the `from` component alone, which works because the primary sort
//! component is the source state.

use super::edge::Edge;
use super::error::TableError;
use super::state::State;
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// Ordered collection of transition edges with unique `(from, to)` keys.
///
/// # Example
///
/// ```rust
/// use fsm_blueprint::core::{Edge, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// table.insert(Edge::new("B", "C")).unwrap();
/// table.insert(Edge::new("A", "B")).unwrap();
///
/// assert!(table.lookup_exact(&"A", &"B").is_some());
/// assert!(table.lookup_exact(&"A", &"C").is_none());
/// assert!(table.lookup_prefix(&"B").is_some());
/// assert_eq!(table.to_string(), "(A -> B) -> (B -> C)");
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State> {
    edges: Vec<Edge<S>>,
}

impl<S: State> Default for TransitionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionTable<S> {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Insert an edge at its sorted position and return that position.
    ///
    /// Returns [`TableError::DuplicateTransition`] and leaves the table
    /// untouched if an edge with the same `(from, to)` already exists.
    pub fn insert(&mut self, edge: Edge<S>) -> Result<usize, TableError> {
        match self
            .edges
            .binary_search_by(|e| e.cmp_key(edge.from(), edge.to()))
        {
            Ok(_) => Err(TableError::DuplicateTransition {
                from: edge.from().name().into_owned(),
                to: edge.to().name().into_owned(),
            }),
            Err(position) => {
                trace!(from = %edge.from().name(), to = %edge.to().name(), position, "inserting transition edge");
                self.edges.insert(position, edge);
                Ok(position)
            }
        }
    }

    /// Find the edge for exactly `(from, to)`.
    pub fn lookup_exact(&self, from: &S, to: &S) -> Option<&Edge<S>> {
        self.position(from, to).map(|i| &self.edges[i])
    }

    /// Find any one edge leaving `from`.
    ///
    /// Only existence is meaningful; which of several outgoing edges is
    /// returned is unspecified.
    pub fn lookup_prefix(&self, from: &S) -> Option<&Edge<S>> {
        self.edges
            .binary_search_by(|e| e.from().cmp(from))
            .ok()
            .map(|i| &self.edges[i])
    }

    pub(crate) fn lookup_exact_mut(&mut self, from: &S, to: &S) -> Option<&mut Edge<S>> {
        self.position(from, to).map(|i| &mut self.edges[i])
    }

    /// Edge at a position previously returned by [`insert`](Self::insert).
    pub(crate) fn edge_at_mut(&mut self, position: usize) -> &mut Edge<S> {
        &mut self.edges[position]
    }

    fn position(&self, from: &S, to: &S) -> Option<usize> {
        self.edges
            .binary_search_by(|e| e.cmp_key(from, to))
            .ok()
    }

    /// Iterate over the edges in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge<S>> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check the sort invariant: keys strictly ascending.
    pub fn is_sorted(&self) -> bool {
        self.edges
            .windows(2)
            .all(|pair| pair[0].key().cmp(&pair[1].key()) == Ordering::Less)
    }
}

/// Renders the chain `(A -> B) -> (B -> C)`, or `<-` for an empty table.
impl<S: State> fmt::Display for TransitionTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.edges.is_empty() {
            return f.write_str("<-");
        }

        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{edge}")?;
        }
        Ok(())
    }
}
