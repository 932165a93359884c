//! The assertion entry point.

use std::fmt;

use crate::description::Description;
use crate::matcher::Matcher;
use crate::output::{ConsoleOutput, OutputAdapter};

/// Evaluate `matcher` against `actual`, reporting through `output`.
///
/// On a match this returns the adapter's success value. On a mismatch it
/// renders the matcher's description and the `Debug` form of the actual
/// value and returns (or panics/prints, per the adapter) the failure value.
/// Evaluation itself is pure and deterministic; only the adapter performs
/// I/O.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, is, less_than, output::StructuredOutput};
///
/// let result = assert_that(&3, &is(less_than(5)), &StructuredOutput);
/// assert!(result.is_pass());
/// ```
#[track_caller]
pub fn assert_that<A, M, O>(actual: &A, matcher: &M, output: &O) -> O::Output
where
    A: fmt::Debug + ?Sized,
    M: Matcher<A>,
    O: OutputAdapter,
{
    if matcher.matches(actual) {
        return output.success();
    }
    let mut expected = Description::new();
    matcher.describe(&mut expected);
    output.failure(expected.as_str(), &format!("{:?}", actual))
}

/// Evaluate `matcher` against `actual` with the console adapter.
///
/// Returns `true` on a match; on a mismatch prints the failure message to
/// stdout and returns `false`.
///
/// # Example
///
/// ```rust
/// use attest::{check_that, contains};
///
/// assert!(check_that(&vec![3, 5, 6, 1], &contains(6)));
/// assert!(!check_that(&vec![3, 5, 1], &contains(6)));
/// ```
pub fn check_that<A, M>(actual: &A, matcher: &M) -> bool
where
    A: fmt::Debug + ?Sized,
    M: Matcher<A>,
{
    assert_that(actual, matcher, &ConsoleOutput)
}

/// Assert that `actual` satisfies `matcher`, panicking on mismatch.
///
/// The panic message is the golden failure format
/// (`Expected: <matcher>\n but got: <actual>`), attributed to the macro
/// call site so test failures point at the right line.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, contains, is, starts_with};
///
/// assert_that!(vec![3, 5, 6, 1], contains(6));
/// assert_that!("release-notes", is(starts_with("release")));
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $matcher:expr $(,)?) => {
        $crate::assert_that(&$actual, &$matcher, &$crate::output::PanicOutput)
    };
}
