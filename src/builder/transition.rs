//! Builders for declaring transitions.
//!
//! Two styles are available. [`TransitionBuilder`] is a standalone value that
//! collects `from`, `to` and an optional handler in any order and is turned
//! into an [`Edge`] by `build()`. The declaration chain started by
//! [`Blueprint::from`] or [`Blueprint::to`] commits the edge into the
//! blueprint as soon as the second endpoint is supplied.

use crate::builder::blueprint::Blueprint;
use crate::builder::error::BuildError;
use crate::core::{Edge, Handler, State};
use crate::runtime::Machine;
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State> {
    from: Option<S>,
    to: Option<S>,
    handler: Option<Handler<S>>,
}

impl<S: State> TransitionBuilder<S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            handler: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the handler run after the transition (optional).
    pub fn then<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Machine<S>) + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Edge<S>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        let edge = Edge::new(from, to);
        Ok(match self.handler {
            Some(handler) => edge.with_handler(handler),
            None => edge,
        })
    }
}

impl<S: State> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A declaration whose source is known. Supplying the target with
/// [`to`](Self::to) commits the edge.
#[must_use = "a declaration is only committed once both endpoints are set"]
pub struct FromDeclaration<'a, S: State> {
    blueprint: &'a mut Blueprint<S>,
    from: S,
    handler: Option<Handler<S>>,
}

impl<'a, S: State> FromDeclaration<'a, S> {
    pub(crate) fn new(blueprint: &'a mut Blueprint<S>, from: S) -> Self {
        Self {
            blueprint,
            from,
            handler: None,
        }
    }

    /// Set the handler ahead of the target; it is attached when the edge is committed.
    pub fn then<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Machine<S>) + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Set the target and commit the edge into the blueprint.
    pub fn to(self, to: S) -> Result<Committed<'a, S>, BuildError> {
        commit(self.blueprint, self.from, to, self.handler)
    }
}

/// A declaration whose target is known. Supplying the source with
/// [`from`](Self::from) commits the edge.
#[must_use = "a declaration is only committed once both endpoints are set"]
pub struct ToDeclaration<'a, S: State> {
    blueprint: &'a mut Blueprint<S>,
    to: S,
    handler: Option<Handler<S>>,
}

impl<'a, S: State> ToDeclaration<'a, S> {
    pub(crate) fn new(blueprint: &'a mut Blueprint<S>, to: S) -> Self {
        Self {
            blueprint,
            to,
            handler: None,
        }
    }

    /// Set the handler ahead of the source; it is attached when the edge is committed.
    pub fn then<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Machine<S>) + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Set the source and commit the edge into the blueprint.
    pub fn from(self, from: S) -> Result<Committed<'a, S>, BuildError> {
        commit(self.blueprint, from, self.to, self.handler)
    }
}

/// Handle to an edge that is already in the blueprint's table.
///
/// The handle borrows the blueprint mutably, so nothing else can be inserted
/// while it lives and `position` stays valid.
pub struct Committed<'a, S: State> {
    blueprint: &'a mut Blueprint<S>,
    position: usize,
    from: S,
    to: S,
}

impl<'a, S: State> Committed<'a, S> {
    /// Attach a handler to the committed edge, replacing any earlier one.
    pub fn then<F>(self, handler: F) -> Self
    where
        F: Fn(&mut Machine<S>) + Send + Sync + 'static,
    {
        self.blueprint
            .edge_at_mut(self.position)
            .set_handler(Arc::new(handler));
        self
    }

    /// Commit another edge out of the same source state.
    pub fn also(self, to: S) -> Result<Committed<'a, S>, BuildError> {
        commit(self.blueprint, self.from, to, None)
    }

    pub fn from_state(&self) -> &S {
        &self.from
    }

    pub fn to_state(&self) -> &S {
        &self.to
    }
}

fn commit<'a, S: State>(
    blueprint: &'a mut Blueprint<S>,
    from: S,
    to: S,
    handler: Option<Handler<S>>,
) -> Result<Committed<'a, S>, BuildError> {
    let edge = Edge::new(from.clone(), to.clone());
    let edge = match handler {
        Some(handler) => edge.with_handler(handler),
        None => edge,
    };
    let position = blueprint.commit(edge)?;

    Ok(Committed {
        blueprint,
        position,
        from,
        to,
    })
}
