//! Committed transition edges.

use super::state::State;
use crate::runtime::Machine;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Callback run synchronously after a machine moves along an edge.
///
/// The handler receives the machine itself, already in the target state, so
/// it may inspect the new state or call [`Machine::goto`] again.
pub type Handler<S> = Arc<dyn Fn(&mut Machine<S>) + Send + Sync>;

/// A legal single-hop move from one state to another.
///
/// Edges are produced by the builders in [`crate::builder`] once both ends are
/// known. The endpoints cannot change after that; only the handler may be
/// attached or replaced while the owning blueprint is still being built.
pub struct Edge<S: State> {
    from: S,
    to: S,
    handler: Option<Handler<S>>,
}

impl<S: State> Edge<S> {
    /// Create an edge without a handler.
    pub fn new(from: S, to: S) -> Self {
        Self {
            from,
            to,
            handler: None,
        }
    }

    /// Attach a handler to the edge.
    pub fn with_handler(mut self, handler: Handler<S>) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn from(&self) -> &S {
        &self.from
    }

    pub fn to(&self) -> &S {
        &self.to
    }

    /// The composite sort key. Ordering by `(from, to)` keeps every edge
    /// leaving the same state contiguous.
    pub fn key(&self) -> (&S, &S) {
        (&self.from, &self.to)
    }

    pub fn handler(&self) -> Option<&Handler<S>> {
        self.handler.as_ref()
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub(crate) fn set_handler(&mut self, handler: Handler<S>) {
        self.handler = Some(handler);
    }

    pub(crate) fn cmp_key(&self, from: &S, to: &S) -> Ordering {
        self.key().cmp(&(from, to))
    }
}

impl<S: State> Clone for Edge<S> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<S: State> fmt::Debug for Edge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

impl<S: State> fmt::Display for Edge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.from.name(), self.to.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_orders_by_source_first() {
        let ab = Edge::new("A", "B");
        let az = Edge::new("A", "Z");
        let ba = Edge::new("B", "A");

        assert!(ab.key() < az.key());
        assert!(az.key() < ba.key());
        assert_eq!(ab.cmp_key(&"A", &"B"), Ordering::Equal);
    }

    #[test]
    fn display_uses_state_names() {
        assert_eq!(Edge::new(1u8, 2u8).to_string(), "(1 -> 2)");
    }

    #[test]
    fn clone_shares_handler() {
        let handler: Handler<&'static str> = Arc::new(|_m: &mut Machine<&'static str>| {});
        let edge = Edge::new("A", "B").with_handler(handler);
        let cloned = edge.clone();

        assert!(cloned.has_handler());
        assert!(Arc::ptr_eq(edge.handler().unwrap(), cloned.handler().unwrap()));
    }

    #[test]
    fn debug_reports_handler_presence() {
        let edge = Edge::new("A", "B");
        assert_eq!(
            format!("{edge:?}"),
            r#"Edge { from: "A", to: "B", has_handler: false }"#
        );
    }
}
