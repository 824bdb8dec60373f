//! The node contract shared by every element of a computation tree.

use crate::error::OperatorError;

/// The outcome of evaluating a node: the new state paired with the
/// produced value, or the single failure kind raised by an operator.
pub type ApplyResult<S, A> = Result<(S, A), OperatorError>;

/// One step of a stateful computation.
///
/// A tree of nodes is an immutable description of a computation over a
/// state of type `S`. Evaluation is a plain depth-first traversal that
/// threads the state value through the tree; it never mutates a node, so
/// the same tree can be applied to any number of independent states.
///
/// Mismatched chaining is rejected at compile time: a combinator only
/// accepts children whose `Value` fits its own input type.
///
/// # Examples
///
/// ```rust
/// use statemonad::StateMonadNode;
/// use statemonad::tree::Init;
///
/// let leaf = Init::new(2);
/// let (state, value) = leaf.apply(7).unwrap();
/// assert_eq!((state, value), (7, 2));
/// ```
pub trait StateMonadNode<S> {
    /// The value produced alongside the new state.
    type Value;

    /// Evaluates this node against `state`.
    ///
    /// # Errors
    ///
    /// Returns an [`OperatorError`] when a user-supplied function inside
    /// the tree fails. Failures from child nodes propagate unchanged.
    fn apply(&self, state: S) -> ApplyResult<S, Self::Value>;
}
