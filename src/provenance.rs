//! Call-site provenance for combinator invocations.
//!
//! When a `map` or `flat_map` node is built, the location of the caller's
//! combinator invocation is recorded alongside the user function. If that
//! function later fails during evaluation, the error message names the
//! original call site rather than a frame inside the evaluator.
//!
//! Capture relies on `#[track_caller]`: every construction path between the
//! caller and [`CallSite::capture`] carries the attribute, so the recorded
//! location is the outermost combinator call.
//!
//! # Examples
//!
//! ```rust
//! use statemonad::CallSite;
//!
//! let site = CallSite::capture();
//! assert!(site.file().ends_with(".rs"));
//! assert!(site.line() > 0);
//! ```

use std::fmt;
use std::panic::Location;

/// The source location of a combinator invocation.
///
/// A `CallSite` is captured when a node holding a user function is
/// constructed and is only ever read when an error message is built.
///
/// # Examples
///
/// ```rust
/// use statemonad::CallSite;
///
/// let site = CallSite::capture();
/// assert_eq!(format!("{site}"), format!("{}:{}:{}", site.file(), site.line(), site.column()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    location: &'static Location<'static>,
}

impl CallSite {
    /// Captures the location of the caller.
    ///
    /// The capture sees through every intermediate `#[track_caller]`
    /// frame, so constructors that forward to this method report their
    /// own caller's location.
    #[must_use]
    #[track_caller]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    /// The file in which the combinator was invoked.
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// The 1-based line of the invocation.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// The 1-based column of the invocation.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.location.column()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}:{}:{}",
            self.location.file(),
            self.location.line(),
            self.location.column()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn capture_records_this_file() {
        let site = CallSite::capture();
        assert!(site.file().ends_with("provenance.rs"));
    }

    #[rstest]
    fn capture_propagates_through_track_caller_frames() {
        #[track_caller]
        fn forwarded() -> CallSite {
            CallSite::capture()
        }

        let direct = CallSite::capture();
        let via_helper = forwarded();
        assert_eq!(via_helper.file(), direct.file());
        assert_eq!(via_helper.line(), direct.line() + 1);
    }

    #[rstest]
    fn display_matches_accessors() {
        let site = CallSite::capture();
        assert_eq!(
            format!("{site}"),
            format!("{}:{}:{}", site.file(), site.line(), site.column())
        );
    }

    #[rstest]
    fn call_site_is_copy_and_comparable() {
        let site = CallSite::capture();
        let copied = site;
        assert_eq!(site, copied);
    }
}
