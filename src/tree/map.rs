//! Node applying a transform to its child's value.

use std::fmt;

use super::node::{ApplyResult, StateMonadNode};
use crate::error::{BoxError, OperatorError};
use crate::provenance::CallSite;

/// A node that transforms the value produced by its child.
///
/// The stored function is the canonical fallible form
/// `Fn(Value) -> Result<Output, BoxError>`; the fluent wrapper adapts
/// infallible transforms into it. The call site of the constructing
/// combinator is captured up front so a later failure can report where
/// the transform came from.
///
/// # Examples
///
/// ```rust
/// use statemonad::{StateMonadNode, tree::{Init, Map}};
///
/// let tree = Map::new(Init::new(20), |value: i32| Ok(value + 1));
/// let (state, value) = tree.apply(0).unwrap();
/// assert_eq!((state, value), (0, 21));
/// ```
#[derive(Clone)]
pub struct Map<C, F> {
    child: C,
    func: F,
    call_site: CallSite,
}

impl<C, F> Map<C, F> {
    /// Creates a map node over `child`.
    ///
    /// Captures the caller's location; constructors forwarding here must
    /// be `#[track_caller]` for the capture to reach the original
    /// combinator invocation.
    #[track_caller]
    pub fn new(child: C, func: F) -> Self {
        Self {
            child,
            func,
            call_site: CallSite::capture(),
        }
    }

    /// The child node this map wraps.
    pub const fn child(&self) -> &C {
        &self.child
    }

    /// The location where this node was constructed.
    pub const fn call_site(&self) -> CallSite {
        self.call_site
    }
}

impl<S, O, C, F> StateMonadNode<S> for Map<C, F>
where
    C: StateMonadNode<S>,
    F: Fn(C::Value) -> Result<O, BoxError>,
{
    type Value = O;

    fn apply(&self, state: S) -> ApplyResult<S, O> {
        let (state, value) = self.child.apply(state)?;
        match (self.func)(value) {
            Ok(mapped) => Ok((state, mapped)),
            Err(cause) => Err(OperatorError::wrap("map", self.call_site, cause)),
        }
    }
}

impl<C, F> fmt::Display for Map<C, F>
where
    C: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "map({})", self.child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Init;
    use rstest::rstest;
    use std::error::Error;

    #[derive(Debug)]
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "broken")
        }
    }

    impl Error for Broken {}

    #[rstest]
    fn map_transforms_the_child_value() {
        let tree = Map::new(Init::new(5), |value: i32| Ok(value * 2));
        let (state, value) = tree.apply(7).unwrap();
        assert_eq!(state, 7);
        assert_eq!(value, 10);
    }

    #[rstest]
    fn map_failure_carries_construction_site() {
        let tree = Map::new(Init::new(5), |_: i32| Err::<i32, BoxError>(Box::new(Broken)));
        let error = tree.apply(0).unwrap_err();
        assert_eq!(error.operator(), "map");
        assert!(error.call_site().file().ends_with("map.rs"));
        assert!(error.source().unwrap().downcast_ref::<Broken>().is_some());
    }

    #[rstest]
    fn map_reports_the_call_site_it_was_built_with() {
        let tree = Map::new(Init::new(1), |value: i32| Ok::<_, BoxError>(value));
        let error_tree = Map::new(Init::new(1), |_: i32| Err::<i32, BoxError>(Box::new(Broken)));
        let error = error_tree.apply(0).unwrap_err();
        assert_eq!(error.call_site().line(), tree.call_site().line() + 1);
    }
}
