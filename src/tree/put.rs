//! Node forcing the state to a stored replacement.

use std::fmt;

use super::node::{ApplyResult, StateMonadNode};

/// A node that replaces the state after its child has run.
///
/// The child's resulting state is discarded in favor of the stored
/// replacement; the child's *value* passes through untouched. The
/// replacement is cloned on every application, so the tree stays
/// reusable.
///
/// # Examples
///
/// ```rust
/// use statemonad::{StateMonadNode, tree::{Init, Put}};
///
/// let tree = Put::new(Init::new("kept"), 100);
/// let (state, value) = tree.apply(1).unwrap();
/// assert_eq!(state, 100);
/// assert_eq!(value, "kept");
/// ```
#[derive(Clone, Debug)]
pub struct Put<C, S> {
    child: C,
    state: S,
}

impl<C, S> Put<C, S> {
    /// Creates a put node over `child` with the replacement `state`.
    pub const fn new(child: C, state: S) -> Self {
        Self { child, state }
    }

    /// The child node this put wraps.
    pub const fn child(&self) -> &C {
        &self.child
    }

    /// The replacement state applied after the child runs.
    pub const fn state(&self) -> &S {
        &self.state
    }
}

impl<S, C> StateMonadNode<S> for Put<C, S>
where
    S: Clone,
    C: StateMonadNode<S>,
{
    type Value = C::Value;

    fn apply(&self, state: S) -> ApplyResult<S, C::Value> {
        let (_, value) = self.child.apply(state)?;
        Ok((self.state.clone(), value))
    }
}

impl<C, S> fmt::Display for Put<C, S>
where
    C: fmt::Display,
    S: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "put({}, {:?})", self.child, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Init;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-5)]
    #[case(1000)]
    fn put_forces_the_state_regardless_of_input(#[case] initial: i32) {
        let tree = Put::new(Init::new(()), 7);
        let (state, ()) = tree.apply(initial).unwrap();
        assert_eq!(state, 7);
    }

    #[rstest]
    fn put_preserves_the_child_value() {
        let tree = Put::new(Init::new("kept"), 7);
        let (state, value) = tree.apply(0).unwrap();
        assert_eq!(state, 7);
        assert_eq!(value, "kept");
    }

    #[rstest]
    fn later_put_wins() {
        let tree = Put::new(Put::new(Init::new(()), 1), 2);
        let (state, ()) = tree.apply(0).unwrap();
        assert_eq!(state, 2);
    }
}
