//! Fluent, chainable surface over computation trees.
//!
//! [`StateMonad`] wraps exactly one tree node and exposes the combinators
//! as dot-notation methods. Every combinator consumes the wrapper and
//! rebuilds it around a new composite node; nothing is ever mutated in
//! place. The wrapper is itself a passthrough node, so it can be returned
//! from `flat_map` continuations and nested freely.
//!
//! # Laws
//!
//! `StateMonad` satisfies the Functor and Monad laws:
//!
//! - Identity: `m.map(|x| x)` applies like `m`
//! - Composition: `m.map(f).map(g)` applies like `m.map(|x| g(f(x)))`
//! - Left Identity: `from_value(a).flat_map(f)` applies like `f(a)`
//! - Associativity: `m.flat_map(f).flat_map(g)` applies like
//!   `m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! Counter pattern:
//!
//! ```rust
//! use statemonad::{from_value, get};
//!
//! let bump = get::<i32>().flat_map(|count| from_value(count).put(count + 1));
//! let (state, previous) = bump.apply(41).unwrap();
//! assert_eq!(state, 42);
//! assert_eq!(previous, 41);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error::{BoxError, OperatorError};
use crate::tree::{ApplyResult, FlatMap, Get, Init, Map, Put, StateMonadNode, Zip};

/// A chainable wrapper around one computation-tree node.
///
/// `S` is the state type threaded through evaluation; `N` is the concrete
/// node the wrapper currently holds. Each combinator returns a wrapper
/// over a new node type, so mismatched chaining is a compile-time error:
///
/// ```compile_fail
/// use statemonad::from_value;
///
/// // the child produces i32, the transform expects String
/// let broken = from_value::<(), _>(1).map(|text: String| text.len());
/// ```
///
/// ```compile_fail
/// use statemonad::from_value;
///
/// // zipped computations must share one state type
/// let left = from_value::<i32, _>(1);
/// let right = from_value::<String, _>(2);
/// let broken = left.zip(right);
/// ```
pub struct StateMonad<S, N> {
    child: N,
    marker: PhantomData<S>,
}

impl<S, N> StateMonad<S, N>
where
    N: StateMonadNode<S>,
{
    /// Rebuilds the wrapper with its single field, the child node,
    /// replaced.
    fn with_child<M>(child: M) -> StateMonad<S, M> {
        StateMonad {
            child,
            marker: PhantomData,
        }
    }

    /// Borrows the underlying tree node.
    pub const fn tree(&self) -> &N {
        &self.child
    }

    /// Unwraps the underlying tree node.
    pub fn into_tree(self) -> N {
        self.child
    }

    /// Evaluates the wrapped tree against `state`.
    ///
    /// # Errors
    ///
    /// Returns an [`OperatorError`] when a user function inside the tree
    /// fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<i32, _>("result");
    /// let (state, value) = monad.apply(3).unwrap();
    /// assert_eq!(state, 3);
    /// assert_eq!(value, "result");
    /// ```
    pub fn apply(&self, state: S) -> ApplyResult<S, N::Value> {
        self.child.apply(state)
    }

    /// Evaluates the tree and keeps only the produced value.
    ///
    /// # Errors
    ///
    /// Returns an [`OperatorError`] when a user function inside the tree
    /// fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<i32, _>(20).map(|value| value + 1);
    /// assert_eq!(monad.eval(0).unwrap(), 21);
    /// ```
    pub fn eval(&self, state: S) -> Result<N::Value, OperatorError> {
        let (_, value) = self.apply(state)?;
        Ok(value)
    }

    /// Evaluates the tree and keeps only the final state.
    ///
    /// # Errors
    ///
    /// Returns an [`OperatorError`] when a user function inside the tree
    /// fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<i32, _>(()).put(9);
    /// assert_eq!(monad.exec(0).unwrap(), 9);
    /// ```
    pub fn exec(&self, state: S) -> Result<S, OperatorError> {
        let (state, _) = self.apply(state)?;
        Ok(state)
    }

    /// Transforms the produced value with a pure function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<(), _>(5).map(|value| value + 1);
    /// let (state, value) = monad.apply(()).unwrap();
    /// assert_eq!(state, ());
    /// assert_eq!(value, 6);
    /// ```
    #[track_caller]
    pub fn map<O, F>(
        self,
        func: F,
    ) -> StateMonad<S, Map<N, impl Fn(N::Value) -> Result<O, BoxError>>>
    where
        F: Fn(N::Value) -> O,
    {
        Self::with_child(Map::new(self.child, move |value| Ok(func(value))))
    }

    /// Transforms the produced value with a fallible function.
    ///
    /// A failure is wrapped into an [`OperatorError`] carrying the
    /// location of this call, unless it already is one, in which case it
    /// surfaces unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<(), _>("7").try_map(|text: &str| text.parse::<i32>());
    /// let (_, value) = monad.apply(()).unwrap();
    /// assert_eq!(value, 7);
    ///
    /// let monad = from_value::<(), _>("oops").try_map(|text: &str| text.parse::<i32>());
    /// let error = monad.apply(()).unwrap_err();
    /// assert_eq!(error.operator(), "map");
    /// ```
    #[track_caller]
    pub fn try_map<O, E, F>(
        self,
        func: F,
    ) -> StateMonad<S, Map<N, impl Fn(N::Value) -> Result<O, BoxError>>>
    where
        F: Fn(N::Value) -> Result<O, E>,
        E: Into<BoxError>,
    {
        Self::with_child(Map::new(self.child, move |value| {
            func(value).map_err(Into::into)
        }))
    }

    /// Continues into a computation chosen from the produced value.
    ///
    /// Where [`map`] can only change the value, `flat_map` lets the shape
    /// of the remaining computation depend on it.
    ///
    /// [`map`]: StateMonad::map
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::{from_value, get};
    ///
    /// let monad = get::<i32>().flat_map(|current| from_value(current).put(current + 1));
    /// let (state, value) = monad.apply(10).unwrap();
    /// assert_eq!(state, 11);
    /// assert_eq!(value, 10);
    /// ```
    #[track_caller]
    pub fn flat_map<N2, F>(
        self,
        func: F,
    ) -> StateMonad<S, FlatMap<N, impl Fn(N::Value) -> Result<StateMonad<S, N2>, BoxError>>>
    where
        N2: StateMonadNode<S>,
        F: Fn(N::Value) -> StateMonad<S, N2>,
    {
        Self::with_child(FlatMap::new(self.child, move |value| Ok(func(value))))
    }

    /// Continues into a computation chosen by a fallible function.
    ///
    /// Failure semantics match [`try_map`]: wrapped once, with the
    /// location of this call, never double-wrapped.
    ///
    /// [`try_map`]: StateMonad::try_map
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<(), _>("3")
    ///     .try_flat_map(|text: &str| Ok::<_, std::num::ParseIntError>(from_value(text.parse::<i32>()?)));
    /// let (_, value) = monad.apply(()).unwrap();
    /// assert_eq!(value, 3);
    /// ```
    #[track_caller]
    pub fn try_flat_map<N2, E, F>(
        self,
        func: F,
    ) -> StateMonad<S, FlatMap<N, impl Fn(N::Value) -> Result<StateMonad<S, N2>, BoxError>>>
    where
        N2: StateMonadNode<S>,
        E: Into<BoxError>,
        F: Fn(N::Value) -> Result<StateMonad<S, N2>, E>,
    {
        Self::with_child(FlatMap::new(self.child, move |value| {
            func(value).map_err(Into::into)
        }))
    }

    /// Substitutes the current state for the produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<i32, _>("ignored").get();
    /// let (state, value) = monad.apply(7).unwrap();
    /// assert_eq!((state, value), (7, 7));
    /// ```
    #[must_use]
    pub fn get(self) -> StateMonad<S, Get<N>>
    where
        S: Clone,
    {
        Self::with_child(Get::new(self.child))
    }

    /// Forces the state to `state` once this computation has run.
    ///
    /// The produced value is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<i32, _>("kept").put(100);
    /// let (state, value) = monad.apply(1).unwrap();
    /// assert_eq!(state, 100);
    /// assert_eq!(value, "kept");
    /// ```
    #[must_use]
    pub fn put(self, state: S) -> StateMonad<S, Put<N, S>>
    where
        S: Clone,
    {
        Self::with_child(Put::new(self.child, state))
    }

    /// Pairs this computation with another, threading state left to right.
    ///
    /// `self` runs first; its resulting state feeds `other`. Swapping the
    /// operands changes the result of any state-sensitive computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<i32, _>(1).zip(from_value(2));
    /// let (state, value) = monad.apply(0).unwrap();
    /// assert_eq!(state, 0);
    /// assert_eq!(value, (1, 2));
    /// ```
    #[must_use]
    pub fn zip<N2>(self, other: StateMonad<S, N2>) -> StateMonad<S, Zip<N, N2>>
    where
        N2: StateMonadNode<S>,
    {
        Self::with_child(Zip::new(self.child, other.child))
    }

    /// Sequences another computation after this one, discarding this
    /// one's value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<i32, _>("dropped").then(from_value("kept"));
    /// let (_, value) = monad.apply(0).unwrap();
    /// assert_eq!(value, "kept");
    /// ```
    #[track_caller]
    pub fn then<N2>(
        self,
        other: StateMonad<S, N2>,
    ) -> StateMonad<S, Map<Zip<N, N2>, impl Fn((N::Value, N2::Value)) -> Result<N2::Value, BoxError>>>
    where
        N2: StateMonadNode<S>,
    {
        self.zip(other).map(|(_, second)| second)
    }

    /// Combines this computation with another using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statemonad::from_value;
    ///
    /// let monad = from_value::<i32, _>(2).map2(from_value(3), |a, b| a * b);
    /// let (_, value) = monad.apply(0).unwrap();
    /// assert_eq!(value, 6);
    /// ```
    #[track_caller]
    pub fn map2<N2, O, F>(
        self,
        other: StateMonad<S, N2>,
        func: F,
    ) -> StateMonad<S, Map<Zip<N, N2>, impl Fn((N::Value, N2::Value)) -> Result<O, BoxError>>>
    where
        N2: StateMonadNode<S>,
        F: Fn(N::Value, N2::Value) -> O,
    {
        self.zip(other).map(move |(first, second)| func(first, second))
    }
}

impl<S, N> StateMonadNode<S> for StateMonad<S, N>
where
    N: StateMonadNode<S>,
{
    type Value = N::Value;

    fn apply(&self, state: S) -> ApplyResult<S, N::Value> {
        self.child.apply(state)
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<S, N> Clone for StateMonad<S, N>
where
    N: Clone,
{
    fn clone(&self) -> Self {
        Self {
            child: self.child.clone(),
            marker: PhantomData,
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<S, N> fmt::Display for StateMonad<S, N>
where
    N: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.child)
    }
}

// =============================================================================
// Free Constructors
// =============================================================================

/// Starts a computation from a constant value, leaving the state alone.
///
/// The state type is usually pinned by later combinators or at the
/// `apply` call; annotate it when nothing else does.
///
/// # Examples
///
/// ```rust
/// use statemonad::from_value;
///
/// let monad = from_value::<i32, _>(5).map(|value| value + 1);
/// let (state, value) = monad.apply(0).unwrap();
/// assert_eq!(state, 0);
/// assert_eq!(value, 6);
/// ```
pub fn from_value<S, V>(value: V) -> StateMonad<S, Init<V>>
where
    V: Clone,
{
    StateMonad {
        child: Init::new(value),
        marker: PhantomData,
    }
}

/// Starts a computation that yields the current state as its value.
///
/// # Examples
///
/// ```rust
/// use statemonad::get;
///
/// let monad = get::<i32>();
/// let (state, value) = monad.apply(42).unwrap();
/// assert_eq!((state, value), (42, 42));
/// ```
#[must_use]
pub fn get<S>() -> StateMonad<S, Get<Init<()>>>
where
    S: Clone,
{
    StateMonad {
        child: Get::new(Init::new(())),
        marker: PhantomData,
    }
}

/// Starts a computation that replaces the state and yields `()`.
///
/// # Examples
///
/// ```rust
/// use statemonad::put;
///
/// let monad = put(100);
/// let (state, ()) = monad.apply(42).unwrap();
/// assert_eq!(state, 100);
/// ```
pub fn put<S>(state: S) -> StateMonad<S, Put<Init<()>, S>>
where
    S: Clone,
{
    StateMonad {
        child: Put::new(Init::new(()), state),
        marker: PhantomData,
    }
}
