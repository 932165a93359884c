//! Output adapters: what a failed match produces.
//!
//! Matcher evaluation itself is pure; the adapter is the only place any
//! side effect happens. The adapter is chosen once per integration (a value
//! passed to [`assert_that`](crate::assert_that), or implied by the
//! [`assert_that!`](crate::assert_that) macro), never through global state.

use crate::error::AssertionError;

/// Strategy deciding how a match success or failure is reported.
pub trait OutputAdapter {
    /// The value an assertion evaluates to under this adapter.
    type Output;

    /// The success value.
    fn success(&self) -> Self::Output;

    /// The failure value, given the matcher's description and the `Debug`
    /// rendering of the actual value.
    #[track_caller]
    fn failure(&self, expected: &str, actual: &str) -> Self::Output;
}

/// The golden failure message: `Expected: <matcher>\n but got: <actual>`.
pub fn format_failure(expected: &str, actual: &str) -> String {
    format!("Expected: {}\n but got: {}", expected, actual)
}

/// Adapter returning `bool`, printing the failure message to stdout.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, equal_to, output::ConsoleOutput};
///
/// let passed = assert_that(&5, &equal_to(5), &ConsoleOutput);
/// assert!(passed);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl OutputAdapter for ConsoleOutput {
    type Output = bool;

    fn success(&self) -> bool {
        true
    }

    fn failure(&self, expected: &str, actual: &str) -> bool {
        println!("{}", format_failure(expected, actual));
        false
    }
}

/// Adapter that panics with the failure message.
///
/// This is what the [`assert_that!`](crate::assert_that) macro uses, so a
/// failed assertion surfaces as an ordinary Rust test failure attributed to
/// the caller's file and line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicOutput;

impl OutputAdapter for PanicOutput {
    type Output = ();

    fn success(&self) {}

    #[track_caller]
    fn failure(&self, expected: &str, actual: &str) {
        panic!("{}", format_failure(expected, actual));
    }
}

/// Adapter returning `Result`, carrying the failure as an
/// [`AssertionError`].
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, equal_to, output::FallibleOutput};
///
/// let result = assert_that(&5, &equal_to(6), &FallibleOutput);
/// let err = result.unwrap_err();
/// assert_eq!(err.expected, "6");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FallibleOutput;

impl OutputAdapter for FallibleOutput {
    type Output = Result<(), AssertionError>;

    fn success(&self) -> Self::Output {
        Ok(())
    }

    fn failure(&self, expected: &str, actual: &str) -> Self::Output {
        Err(AssertionError {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// An opaque pass/fail value for host test-framework integration.
///
/// Produced by [`StructuredOutput`]; the host framework owns presentation,
/// so nothing is printed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether the match succeeded.
    pub passed: bool,
    /// The failure message, present only when the match failed.
    pub message: Option<String>,
}

impl MatchResult {
    pub(crate) fn pass() -> Self {
        Self {
            passed: true,
            message: None,
        }
    }

    pub(crate) fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
        }
    }

    /// Whether the match succeeded.
    pub fn is_pass(&self) -> bool {
        self.passed
    }
}

/// Adapter returning a [`MatchResult`], with no console side effects.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, equal_to, output::StructuredOutput};
///
/// let result = assert_that(&5, &equal_to(6), &StructuredOutput);
/// assert!(!result.is_pass());
/// assert_eq!(result.message.unwrap(), "Expected: 6\n but got: 5");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredOutput;

impl OutputAdapter for StructuredOutput {
    type Output = MatchResult;

    fn success(&self) -> MatchResult {
        MatchResult::pass()
    }

    fn failure(&self, expected: &str, actual: &str) -> MatchResult {
        MatchResult::fail(format_failure(expected, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_failure_format() {
        assert_eq!(
            format_failure("is not \"foo\"", "\"foo\""),
            "Expected: is not \"foo\"\n but got: \"foo\""
        );
    }

    #[test]
    fn test_console_adapter_returns_bool() {
        assert!(ConsoleOutput.success());
        assert!(!ConsoleOutput.failure("is 1", "2"));
    }

    #[test]
    #[should_panic(expected = "Expected: is 1\n but got: 2")]
    fn test_panic_adapter_panics_with_message() {
        PanicOutput.failure("is 1", "2");
    }

    #[test]
    fn test_fallible_adapter_carries_both_sides() {
        let err = FallibleOutput.failure("is 1", "2").unwrap_err();
        assert_eq!(err.expected, "is 1");
        assert_eq!(err.actual, "2");
        assert!(FallibleOutput.success().is_ok());
    }

    #[test]
    fn test_structured_adapter_has_no_message_on_pass() {
        let pass = StructuredOutput.success();
        assert!(pass.is_pass());
        assert_eq!(pass.message, None);
    }
}
