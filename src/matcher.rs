//! The core matcher contract.

use crate::description::Description;

/// A composable predicate over an actual value of type `A`.
///
/// A matcher is immutable once constructed and owns any expected value it was
/// built with, so it stays valid even when the original value was a
/// temporary. `matches` is a pure function of its inputs: it performs no I/O,
/// never panics for well-typed inputs, and evaluating it twice against the
/// same actual value yields the same result.
///
/// `describe` appends a human-readable phrase (e.g. `contains 5`) to the
/// provided sink and writes nowhere else. Failure reporting happens in the
/// configured [`OutputAdapter`](crate::output::OutputAdapter), not here.
///
/// # Example
///
/// ```rust
/// use attest::{equal_to, Matcher};
///
/// let matcher = equal_to(42);
/// assert!(matcher.matches(&42));
/// assert!(!matcher.matches(&7));
/// ```
pub trait Matcher<A: ?Sized> {
    /// Test the actual value against this matcher's predicate.
    fn matches(&self, actual: &A) -> bool;

    /// Append a description of this matcher to the sink.
    fn describe(&self, out: &mut Description);
}

// Matchers compose by value, but a borrowed or boxed matcher is still a
// matcher. Combinators rely on the boxed impl to hold heterogeneous lists.

impl<A: ?Sized, M: Matcher<A> + ?Sized> Matcher<A> for &M {
    fn matches(&self, actual: &A) -> bool {
        (**self).matches(actual)
    }

    fn describe(&self, out: &mut Description) {
        (**self).describe(out)
    }
}

impl<A: ?Sized, M: Matcher<A> + ?Sized> Matcher<A> for Box<M> {
    fn matches(&self, actual: &A) -> bool {
        (**self).matches(actual)
    }

    fn describe(&self, out: &mut Description) {
        (**self).describe(out)
    }
}

/// Render a matcher's full description as a `String`.
///
/// # Example
///
/// ```rust
/// use attest::{description_of, close_to};
///
/// let description = description_of(&close_to(1.0, 0.03));
/// assert_eq!(description, "a numeric value within +/-0.03 of 1.0");
/// ```
pub fn description_of<A: ?Sized, M: Matcher<A> + ?Sized>(matcher: &M) -> String {
    let mut out = Description::new();
    matcher.describe(&mut out);
    out.into_string()
}
