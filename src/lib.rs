//! # statemonad
//!
//! Composable expression trees for pure stateful computations.
//!
//! ## Overview
//!
//! A computation that threads an explicit, immutable state value through
//! a sequence of steps is described here as an immutable tree of nodes
//! and evaluated by a single recursive `apply` traversal:
//!
//! - **Tree**: node variants `Init`, `Map`, `FlatMap`, `Get`, `Put` and
//!   `Zip`, composed statically so mismatched chaining fails to compile.
//! - **Fluent wrapper**: [`StateMonad`] exposes the combinators with
//!   dot-notation chaining and rebuilds itself immutably on each call.
//! - **Errors**: user-function failures surface as a single
//!   [`OperatorError`] that chains the original cause and names the
//!   call site where the failing combinator was invoked.
//!
//! There is no I/O, persistence, or asynchronous execution here; trees
//! are plain values and evaluation runs to completion on the calling
//! thread.
//!
//! ## Example
//!
//! ```rust
//! use statemonad::{from_value, get};
//!
//! // read the counter, then bump it, keeping the old value as result
//! let bump = get::<i32>().flat_map(|count| from_value(count).put(count + 1));
//!
//! let (state, previous) = bump.apply(41).unwrap();
//! assert_eq!(state, 42);
//! assert_eq!(previous, 41);
//!
//! // the tree is immutable; it can be applied again to any other state
//! let (state, previous) = bump.apply(7).unwrap();
//! assert_eq!(state, 8);
//! assert_eq!(previous, 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and constructors.
///
/// # Usage
///
/// ```rust
/// use statemonad::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{BoxError, OperatorError};
    pub use crate::monad::{StateMonad, from_value, get, put};
    pub use crate::provenance::CallSite;
    pub use crate::tree::{ApplyResult, StateMonadNode};
}

pub mod error;
pub mod monad;
pub mod provenance;
pub mod tree;

pub use error::{BoxError, OperatorError};
pub use monad::{StateMonad, from_value, get, put};
pub use provenance::CallSite;
pub use tree::{ApplyResult, StateMonadNode};
