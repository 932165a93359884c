//! Ordering matchers: less-than, greater-than, and their inclusive forms.

use std::cmp::Ordering;
use std::fmt;

use crate::capability::OrderingComparable;
use crate::description::Description;
use crate::matcher::Matcher;

/// The four ordering relations a matcher can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderingOp {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl OrderingOp {
    /// Whether `actual <op> expected` holds given their relative ordering.
    fn admits(self, ordering: Ordering) -> bool {
        match self {
            OrderingOp::Less => ordering == Ordering::Less,
            OrderingOp::LessOrEqual => ordering != Ordering::Greater,
            OrderingOp::Greater => ordering == Ordering::Greater,
            OrderingOp::GreaterOrEqual => ordering != Ordering::Less,
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            OrderingOp::Less => "less than ",
            OrderingOp::LessOrEqual => "less than or equal to ",
            OrderingOp::Greater => "greater than ",
            OrderingOp::GreaterOrEqual => "greater than or equal to ",
        }
    }
}

/// Matcher comparing the actual value against an expected bound.
///
/// Built by [`less_than`], [`greater_than`], [`less_than_or_equal_to`], and
/// [`greater_than_or_equal_to`].
#[derive(Debug, Clone)]
pub struct OrderingMatcher<E> {
    expected: E,
    op: OrderingOp,
}

/// Match values strictly less than `expected`.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, is_not, less_than};
///
/// assert_that!(3, less_than(5));
/// assert_that!(5, is_not(less_than(5)));
/// ```
pub fn less_than<E>(expected: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        expected,
        op: OrderingOp::Less,
    }
}

/// Match values less than or equal to `expected`.
pub fn less_than_or_equal_to<E>(expected: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        expected,
        op: OrderingOp::LessOrEqual,
    }
}

/// Match values strictly greater than `expected`.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, greater_than};
///
/// assert_that!(10, greater_than(5));
/// ```
pub fn greater_than<E>(expected: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        expected,
        op: OrderingOp::Greater,
    }
}

/// Match values greater than or equal to `expected`.
pub fn greater_than_or_equal_to<E>(expected: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        expected,
        op: OrderingOp::GreaterOrEqual,
    }
}

impl<A, E> Matcher<A> for OrderingMatcher<E>
where
    A: OrderingComparable<E> + ?Sized,
    E: fmt::Debug,
{
    fn matches(&self, actual: &A) -> bool {
        // Incomparable values (e.g. NaN) never match.
        match actual.cmp_value(&self.expected) {
            Some(ordering) => self.op.admits(ordering),
            None => false,
        }
    }

    fn describe(&self, out: &mut Description) {
        out.text(self.op.phrase()).value(&self.expected);
    }
}
