//! String matchers: prefix, suffix, and regex pattern matching.

use regex::Regex;

use crate::description::Description;
use crate::error::PatternError;
use crate::matcher::Matcher;

/// Matcher testing a string prefix. Built by [`starts_with`].
#[derive(Debug, Clone)]
pub struct StartsWith {
    prefix: String,
}

/// Match strings beginning with `prefix`.
///
/// A prefix longer than the actual string is simply a non-match, never an
/// error.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, is_not, starts_with};
///
/// assert_that!("release-notes", starts_with("release"));
/// assert_that!("ab", is_not(starts_with("Notes")));
/// ```
pub fn starts_with(prefix: impl Into<String>) -> StartsWith {
    StartsWith {
        prefix: prefix.into(),
    }
}

impl<A: AsRef<str> + ?Sized> Matcher<A> for StartsWith {
    fn matches(&self, actual: &A) -> bool {
        actual.as_ref().starts_with(&self.prefix)
    }

    fn describe(&self, out: &mut Description) {
        out.text("starts with ").value(self.prefix.as_str());
    }
}

/// Matcher testing a string suffix. Built by [`ends_with`].
#[derive(Debug, Clone)]
pub struct EndsWith {
    suffix: String,
}

/// Match strings ending with `suffix`.
///
/// A suffix longer than the actual string is simply a non-match, never an
/// error.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, ends_with, is_not};
///
/// assert_that!("release-notes", ends_with("notes"));
/// assert_that!("ab", is_not(ends_with("Notes")));
/// ```
pub fn ends_with(suffix: impl Into<String>) -> EndsWith {
    EndsWith {
        suffix: suffix.into(),
    }
}

impl<A: AsRef<str> + ?Sized> Matcher<A> for EndsWith {
    fn matches(&self, actual: &A) -> bool {
        actual.as_ref().ends_with(&self.suffix)
    }

    fn describe(&self, out: &mut Description) {
        out.text("ends with ").value(self.suffix.as_str());
    }
}

/// Matcher testing a full-string regex match. Built by [`matches_pattern`]
/// and [`try_matches_pattern`].
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    pattern: String,
    regex: Regex,
}

/// Match strings the whole of which match `pattern`.
///
/// The pattern is compiled once at construction and anchored at both ends,
/// so `"[0-9]+"` matches `"12345"` but not `"12345a"`. Matching is
/// case-sensitive.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regex; use [`try_matches_pattern`] to
/// handle that case without panicking.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, is_not, matches_pattern};
///
/// assert_that!("12345", matches_pattern("[0-9]+"));
/// assert_that!("12345a", is_not(matches_pattern("[0-9]+")));
/// ```
pub fn matches_pattern(pattern: &str) -> MatchesPattern {
    match try_matches_pattern(pattern) {
        Ok(matcher) => matcher,
        Err(err) => panic!("{}", err),
    }
}

/// Fallible form of [`matches_pattern`].
///
/// # Example
///
/// ```rust
/// use attest::try_matches_pattern;
///
/// assert!(try_matches_pattern("[0-9]+").is_ok());
/// assert!(try_matches_pattern("[0-9").is_err());
/// ```
pub fn try_matches_pattern(pattern: &str) -> Result<MatchesPattern, PatternError> {
    let regex = Regex::new(&format!("^(?:{})$", pattern))?;
    Ok(MatchesPattern {
        pattern: pattern.to_string(),
        regex,
    })
}

impl<A: AsRef<str> + ?Sized> Matcher<A> for MatchesPattern {
    fn matches(&self, actual: &A) -> bool {
        self.regex.is_match(actual.as_ref())
    }

    fn describe(&self, out: &mut Description) {
        out.text("a string matching the pattern ").text(&self.pattern);
    }
}
