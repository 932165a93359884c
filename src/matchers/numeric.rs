//! Numeric matchers.

use crate::capability::Real;
use crate::description::Description;
use crate::matcher::Matcher;

/// Matcher testing numeric closeness within a tolerance. Built by
/// [`close_to`].
#[derive(Debug, Clone, Copy)]
pub struct CloseTo<T> {
    value: T,
    tolerance: T,
}

/// Match numbers within `tolerance` of `value`.
///
/// Defined for real (floating-point) types only; an integer argument fails
/// to compile, because exact integer comparison belongs to
/// [`equal_to`](crate::equal_to).
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, close_to, is_not};
///
/// assert_that!(0.98, close_to(1.0, 0.03));
/// assert_that!(0.90, is_not(close_to(1.0, 0.03)));
/// ```
pub fn close_to<T: Real>(value: T, tolerance: T) -> CloseTo<T> {
    CloseTo { value, tolerance }
}

impl<T: Real> Matcher<T> for CloseTo<T> {
    fn matches(&self, actual: &T) -> bool {
        actual.abs_diff(self.value) <= self.tolerance
    }

    fn describe(&self, out: &mut Description) {
        out.text("a numeric value within +/-")
            .value(&self.tolerance)
            .text(" of ")
            .value(&self.value);
    }
}
