//! Error types for matcher construction and fallible assertion output.

/// A failed assertion, carried by
/// [`FallibleOutput`](crate::output::FallibleOutput).
///
/// The `Display` form is the golden failure message, identical to what the
/// console adapter prints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected: {expected}\n but got: {actual}")]
pub struct AssertionError {
    /// Description of the matcher that failed.
    pub expected: String,
    /// Debug rendering of the actual value.
    pub actual: String,
}

/// An invalid pattern handed to
/// [`try_matches_pattern`](crate::try_matches_pattern).
///
/// Raised at matcher construction, never at match time.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid match pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_error_display_is_golden_format() {
        let err = AssertionError {
            expected: "is 5".to_string(),
            actual: "6".to_string(),
        };
        assert_eq!(err.to_string(), "Expected: is 5\n but got: 6");
    }
}
