//! Error type surfaced by tree evaluation.
//!
//! Evaluation has exactly one failure kind: [`OperatorError`], raised when
//! a user-supplied function inside a `map` or `flat_map` node fails. The
//! error carries the operator name, the [`CallSite`] recorded when the node
//! was constructed, and the original failure as its [`source`].
//!
//! Failures are never caught or retried inside the crate: an error produced
//! deep in a tree bubbles through every enclosing `apply` unchanged. A user
//! function that surfaces an `OperatorError` of its own is passed through
//! as-is rather than wrapped a second time.
//!
//! [`source`]: std::error::Error::source

use std::error::Error;
use std::fmt;

use static_assertions::assert_impl_all;

use crate::provenance::CallSite;

/// A boxed failure produced by a user-supplied function.
///
/// Fallible combinators accept any error convertible into this type.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// The failure kind raised when a user function inside an operator fails.
///
/// # Examples
///
/// ```rust
/// use statemonad::from_value;
///
/// let monad = from_value::<(), _>("not a number").try_map(|text: &str| text.parse::<i32>());
/// let error = monad.apply(()).unwrap_err();
/// assert_eq!(error.operator(), "map");
/// assert!(error.to_string().contains("map failed at"));
/// assert!(error.source().is_some());
/// # use std::error::Error;
/// ```
#[derive(Debug)]
pub struct OperatorError {
    operator: &'static str,
    call_site: CallSite,
    source: BoxError,
}

impl OperatorError {
    /// Wraps a failure raised by a user function.
    ///
    /// If `cause` already is an [`OperatorError`] it is returned unchanged,
    /// keeping the provenance of the operator that originally raised it.
    /// Any other failure becomes the [`source`] of a new error attributed
    /// to `operator` at `call_site`.
    ///
    /// [`source`]: std::error::Error::source
    #[must_use]
    pub fn wrap(operator: &'static str, call_site: CallSite, cause: BoxError) -> Self {
        match cause.downcast::<Self>() {
            Ok(inherited) => *inherited,
            Err(cause) => Self {
                operator,
                call_site,
                source: cause,
            },
        }
    }

    /// The name of the operator whose user function failed.
    #[must_use]
    pub const fn operator(&self) -> &'static str {
        self.operator
    }

    /// The location where the failing operator was invoked.
    #[must_use]
    pub const fn call_site(&self) -> CallSite {
        self.call_site
    }
}

impl fmt::Display for OperatorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} failed at {}: {}",
            self.operator, self.call_site, self.source
        )
    }
}

impl Error for OperatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

// Trees must stay shareable across threads when their payloads are.
assert_impl_all!(OperatorError: Send, Sync);
