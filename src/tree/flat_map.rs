//! Node chaining its child into a value-dependent subtree.

use std::fmt;

use super::node::{ApplyResult, StateMonadNode};
use crate::error::{BoxError, OperatorError};
use crate::provenance::CallSite;

/// A node whose continuation depends on the child's runtime value.
///
/// This is monadic bind: the stored function receives the child's value
/// and produces a fresh subtree, which is then evaluated against the
/// child's resulting state. Unlike [`Map`], the *shape* of the remaining
/// computation can differ per value.
///
/// [`Map`]: super::Map
///
/// # Examples
///
/// ```rust
/// use statemonad::{StateMonadNode, tree::{FlatMap, Init}};
///
/// let tree = FlatMap::new(Init::new(3), |value: i32| Ok(Init::new(value * 10)));
/// let (state, value) = tree.apply(0).unwrap();
/// assert_eq!((state, value), (0, 30));
/// ```
#[derive(Clone)]
pub struct FlatMap<C, F> {
    child: C,
    func: F,
    call_site: CallSite,
}

impl<C, F> FlatMap<C, F> {
    /// Creates a flat-map node over `child`.
    #[track_caller]
    pub fn new(child: C, func: F) -> Self {
        Self {
            child,
            func,
            call_site: CallSite::capture(),
        }
    }

    /// The child node this flat-map wraps.
    pub const fn child(&self) -> &C {
        &self.child
    }

    /// The location where this node was constructed.
    pub const fn call_site(&self) -> CallSite {
        self.call_site
    }
}

impl<S, C, M, F> StateMonadNode<S> for FlatMap<C, F>
where
    C: StateMonadNode<S>,
    M: StateMonadNode<S>,
    F: Fn(C::Value) -> Result<M, BoxError>,
{
    type Value = M::Value;

    fn apply(&self, state: S) -> ApplyResult<S, M::Value> {
        let (state, value) = self.child.apply(state)?;
        let next = match (self.func)(value) {
            Ok(next) => next,
            Err(cause) => return Err(OperatorError::wrap("flat_map", self.call_site, cause)),
        };
        next.apply(state)
    }
}

impl<C, F> fmt::Display for FlatMap<C, F>
where
    C: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "flat_map({})", self.child)
    }
}
