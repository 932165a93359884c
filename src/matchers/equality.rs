//! Equality matchers: `equal_to`, `null`, and the relaxed string equalities.

use std::fmt;

use crate::capability::EqualityComparable;
use crate::description::Description;
use crate::matcher::Matcher;

/// Matcher testing equality against an owned expected value.
///
/// Built by [`equal_to`].
#[derive(Debug, Clone)]
pub struct EqualTo<E> {
    expected: E,
}

/// Match values equal to `expected`.
///
/// Equality resolves through the capability dispatch chain: native
/// `PartialEq` when the type has it, byte-wise comparison for types opted in
/// with [`equality_by_layout!`](crate::equality_by_layout), and a compile
/// error otherwise. Container equality is the container's own: sequences
/// compare position by position, sets and maps ignore iteration order.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, equal_to, is, is_not};
///
/// assert_that!(5, is(equal_to(5)));
/// assert_that!("foo", is_not(equal_to("bar")));
/// ```
pub fn equal_to<E>(expected: E) -> EqualTo<E> {
    EqualTo { expected }
}

impl<A, E> Matcher<A> for EqualTo<E>
where
    A: ?Sized,
    E: EqualityComparable<A> + fmt::Debug,
{
    fn matches(&self, actual: &A) -> bool {
        self.expected.eq_value(actual)
    }

    fn describe(&self, out: &mut Description) {
        out.value(&self.expected);
    }
}

/// Matcher for absent reference-like values. Built by [`null`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Null;

/// Match `Option::None` and null raw pointers.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, is, is_not, null};
///
/// let missing: Option<i32> = None;
/// assert_that!(missing, is(null()));
/// assert_that!(Some(3), is_not(null()));
/// ```
pub fn null() -> Null {
    Null
}

impl<T> Matcher<Option<T>> for Null {
    fn matches(&self, actual: &Option<T>) -> bool {
        actual.is_none()
    }

    fn describe(&self, out: &mut Description) {
        out.text("null");
    }
}

impl<T> Matcher<*const T> for Null {
    fn matches(&self, actual: &*const T) -> bool {
        actual.is_null()
    }

    fn describe(&self, out: &mut Description) {
        out.text("null");
    }
}

impl<T> Matcher<*mut T> for Null {
    fn matches(&self, actual: &*mut T) -> bool {
        actual.is_null()
    }

    fn describe(&self, out: &mut Description) {
        out.text("null");
    }
}

/// Matcher for ASCII case-insensitive string equality.
///
/// Built by [`equal_to_ignoring_case`].
#[derive(Debug, Clone)]
pub struct EqualToIgnoringCase {
    expected: String,
}

/// Match strings equal to `expected` ignoring ASCII case.
///
/// Folding is locale-independent and ASCII-only; non-ASCII casing is out of
/// scope.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, equal_to_ignoring_case};
///
/// assert_that!("Hello World", equal_to_ignoring_case("hello world"));
/// ```
pub fn equal_to_ignoring_case(expected: impl Into<String>) -> EqualToIgnoringCase {
    EqualToIgnoringCase {
        expected: expected.into(),
    }
}

impl<A: AsRef<str> + ?Sized> Matcher<A> for EqualToIgnoringCase {
    fn matches(&self, actual: &A) -> bool {
        self.expected.eq_ignore_ascii_case(actual.as_ref())
    }

    fn describe(&self, out: &mut Description) {
        out.text("equal to ")
            .value(self.expected.as_str())
            .text(" ignoring case");
    }
}

/// Matcher for whitespace-insensitive string equality.
///
/// Built by [`equal_to_ignoring_whitespace`].
#[derive(Debug, Clone)]
pub struct EqualToIgnoringWhitespace {
    expected: String,
}

/// Match strings equal to `expected` once all whitespace is removed.
///
/// Whitespace is stripped entirely from both sides before the comparison,
/// not merely collapsed, so `" my  foo bar"` matches `"   my\tfoo  bar "`.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, equal_to_ignoring_whitespace};
///
/// assert_that!("   my\tfoo  bar ", equal_to_ignoring_whitespace(" my  foo bar"));
/// ```
pub fn equal_to_ignoring_whitespace(expected: impl Into<String>) -> EqualToIgnoringWhitespace {
    EqualToIgnoringWhitespace {
        expected: expected.into(),
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

impl<A: AsRef<str> + ?Sized> Matcher<A> for EqualToIgnoringWhitespace {
    fn matches(&self, actual: &A) -> bool {
        strip_whitespace(&self.expected) == strip_whitespace(actual.as_ref())
    }

    fn describe(&self, out: &mut Description) {
        out.text("equal to ")
            .value(self.expected.as_str())
            .text(" ignoring white space");
    }
}
