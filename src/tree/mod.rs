//! Expression-tree representation of stateful computations.
//!
//! A computation over a state of type `S` is an immutable tree. Leaves
//! are [`Init`] nodes holding constant values; every combinator wraps
//! existing nodes into a new composite, so trees are acyclic by
//! construction and never mutated after they are built.
//!
//! Evaluation is the [`StateMonadNode::apply`] traversal: depth-first,
//! single-threaded, threading the state value through each node. Because
//! `apply` borrows the tree, one tree can be evaluated any number of
//! times, including concurrently from independent states when its
//! payloads are `Send + Sync`.
//!
//! # Node variants
//!
//! - [`Init`]: leaf holding a constant value
//! - [`Map`]: transforms the child's value
//! - [`FlatMap`]: continues into a subtree chosen from the child's value
//! - [`Get`]: yields the current state as the value
//! - [`Put`]: forces the state to a stored replacement
//! - [`Zip`]: pairs two subtrees, threading state left to right
//!
//! Most callers compose trees through [`StateMonad`] rather than these
//! constructors directly.
//!
//! [`StateMonad`]: crate::StateMonad
//!
//! # Examples
//!
//! ```rust
//! use statemonad::StateMonadNode;
//! use statemonad::tree::{Get, Init, Map, Zip};
//!
//! // zip(get, map(init(2))) against state 10
//! let tree = Zip::new(
//!     Get::new(Init::new(())),
//!     Map::new(Init::new(2), |value: i32| Ok(value + 1)),
//! );
//! let (state, value) = tree.apply(10).unwrap();
//! assert_eq!(state, 10);
//! assert_eq!(value, (10, 3));
//! ```

mod flat_map;
mod get;
mod init;
mod map;
mod node;
mod put;
mod zip;

pub use flat_map::FlatMap;
pub use get::Get;
pub use init::Init;
pub use map::Map;
pub use node::{ApplyResult, StateMonadNode};
pub use put::Put;
pub use zip::Zip;
