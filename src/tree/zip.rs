//! Node combining two subtrees into a pair.

use std::fmt;

use super::node::{ApplyResult, StateMonadNode};

/// A node that evaluates two subtrees in sequence and pairs their values.
///
/// The left subtree runs first against the incoming state; its resulting
/// state feeds the right subtree. That ordering is a semantic guarantee:
/// a state-sensitive right subtree observes everything the left one did.
/// Evaluation is never parallel.
///
/// # Examples
///
/// ```rust
/// use statemonad::{StateMonadNode, tree::{Init, Zip}};
///
/// let tree = Zip::new(Init::new(1), Init::new(2));
/// let (state, value) = tree.apply(0).unwrap();
/// assert_eq!((state, value), (0, (1, 2)));
/// ```
#[derive(Clone, Debug)]
pub struct Zip<L, R> {
    left: L,
    right: R,
}

impl<L, R> Zip<L, R> {
    /// Creates a zip node over `left` and `right`.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// The subtree evaluated first.
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// The subtree evaluated second, against the left one's state.
    pub const fn right(&self) -> &R {
        &self.right
    }
}

impl<S, L, R> StateMonadNode<S> for Zip<L, R>
where
    L: StateMonadNode<S>,
    R: StateMonadNode<S>,
{
    type Value = (L::Value, R::Value);

    fn apply(&self, state: S) -> ApplyResult<S, (L::Value, R::Value)> {
        let (state, left) = self.left.apply(state)?;
        let (state, right) = self.right.apply(state)?;
        Ok((state, (left, right)))
    }
}

impl<L, R> fmt::Display for Zip<L, R>
where
    L: fmt::Display,
    R: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "zip({}, {})", self.left, self.right)
    }
}
