//! Leaf node holding a constant value.

use std::fmt;

use super::node::{ApplyResult, StateMonadNode};

/// A leaf that yields a constant value and leaves the state untouched.
///
/// `Init` is the root of every tree: combinators wrap existing nodes, so
/// composition always starts from a leaf.
///
/// # Examples
///
/// ```rust
/// use statemonad::{StateMonadNode, tree::Init};
///
/// let leaf = Init::new("seed");
/// let (state, value) = leaf.apply(1).unwrap();
/// assert_eq!(state, 1);
/// assert_eq!(value, "seed");
/// ```
#[derive(Clone, Debug)]
pub struct Init<V> {
    value: V,
}

impl<V> Init<V> {
    /// Creates a leaf holding `value`.
    pub const fn new(value: V) -> Self {
        Self { value }
    }

    /// The constant value this leaf yields.
    pub const fn value(&self) -> &V {
        &self.value
    }
}

impl<S, V> StateMonadNode<S> for Init<V>
where
    V: Clone,
{
    type Value = V;

    fn apply(&self, state: S) -> ApplyResult<S, V> {
        Ok((state, self.value.clone()))
    }
}

impl<V> fmt::Display for Init<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "init({:?})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-3)]
    #[case(42)]
    fn init_passes_state_through(#[case] state: i32) {
        let leaf = Init::new("constant");
        let (new_state, value) = leaf.apply(state).unwrap();
        assert_eq!(new_state, state);
        assert_eq!(value, "constant");
    }

    #[rstest]
    fn init_is_reusable() {
        let leaf = Init::new(5);
        assert_eq!(leaf.apply(1).unwrap(), (1, 5));
        assert_eq!(leaf.apply(2).unwrap(), (2, 5));
    }

    #[rstest]
    fn init_exposes_its_value() {
        let leaf = Init::new(9);
        assert_eq!(*leaf.value(), 9);
    }
}
