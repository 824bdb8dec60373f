//! Node surfacing the current state as the produced value.

use std::fmt;

use super::node::{ApplyResult, StateMonadNode};

/// A node that discards its child's value and yields the state instead.
///
/// The child still runs first, so any state changes it makes are visible
/// in the value produced here. `get` never alters the state itself.
///
/// # Examples
///
/// ```rust
/// use statemonad::{StateMonadNode, tree::{Get, Init}};
///
/// let tree = Get::new(Init::new("ignored"));
/// let (state, value) = tree.apply(7).unwrap();
/// assert_eq!((state, value), (7, 7));
/// ```
#[derive(Clone, Debug)]
pub struct Get<C> {
    child: C,
}

impl<C> Get<C> {
    /// Creates a get node over `child`.
    pub const fn new(child: C) -> Self {
        Self { child }
    }

    /// The child node this get wraps.
    pub const fn child(&self) -> &C {
        &self.child
    }
}

impl<S, C> StateMonadNode<S> for Get<C>
where
    S: Clone,
    C: StateMonadNode<S>,
{
    type Value = S;

    fn apply(&self, state: S) -> ApplyResult<S, S> {
        let (state, _) = self.child.apply(state)?;
        Ok((state.clone(), state))
    }
}

impl<C> fmt::Display for Get<C>
where
    C: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "get({})", self.child)
    }
}
