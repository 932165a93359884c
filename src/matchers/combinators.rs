//! Combinators: matchers built from other matchers.
//!
//! `any_of`/`all_of` take an ordered list of boxed sub-matchers, evaluated
//! left to right with short-circuiting. The [`any_of!`](crate::any_of) and
//! [`all_of!`](crate::all_of) macros box a heterogeneous argument list for
//! you.

use crate::capability::Iterable;
use crate::description::Description;
use crate::matcher::Matcher;

/// Identity wrapper over another matcher. Built by [`is`].
#[derive(Debug, Clone)]
pub struct Is<M> {
    inner: M,
}

/// Decorate a matcher without changing its behavior, for readable prose:
/// `assert_that!(cheese, is(equal_to(smelly)))` reads better than
/// `assert_that!(cheese, equal_to(smelly))`.
///
/// The description gains an `"is "` prefix.
pub fn is<M>(inner: M) -> Is<M> {
    Is { inner }
}

impl<A: ?Sized, M: Matcher<A>> Matcher<A> for Is<M> {
    fn matches(&self, actual: &A) -> bool {
        self.inner.matches(actual)
    }

    fn describe(&self, out: &mut Description) {
        out.text("is ");
        self.inner.describe(out);
    }
}

/// Logical negation of another matcher. Built by [`is_not`].
#[derive(Debug, Clone)]
pub struct IsNot<M> {
    inner: M,
}

/// Match exactly when the wrapped matcher does not.
///
/// The description gains a `"not "` prefix.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, equal_to, is, is_not};
///
/// assert_that!(5, is(is_not(equal_to(6))));
/// ```
pub fn is_not<M>(inner: M) -> IsNot<M> {
    IsNot { inner }
}

impl<A: ?Sized, M: Matcher<A>> Matcher<A> for IsNot<M> {
    fn matches(&self, actual: &A) -> bool {
        !self.inner.matches(actual)
    }

    fn describe(&self, out: &mut Description) {
        out.text("not ");
        self.inner.describe(out);
    }
}

/// Disjunction over an ordered list of sub-matchers. Built by [`any_of`] or
/// the [`any_of!`](crate::any_of) macro.
pub struct AnyOf<A: ?Sized> {
    matchers: Vec<Box<dyn Matcher<A>>>,
}

/// Match when at least one sub-matcher matches.
///
/// Sub-matchers are evaluated left to right and evaluation stops at the
/// first success. The description joins sub-descriptions with `" or "` and
/// ends with a period.
///
/// # Example
///
/// ```rust
/// use attest::{any_of, assert_that, contains};
///
/// assert_that!(vec![4, 5], any_of!(contains(4), contains(3), contains(6)));
/// ```
pub fn any_of<A: ?Sized>(matchers: Vec<Box<dyn Matcher<A>>>) -> AnyOf<A> {
    AnyOf { matchers }
}

impl<A: ?Sized> Matcher<A> for AnyOf<A> {
    fn matches(&self, actual: &A) -> bool {
        self.matchers.iter().any(|m| m.matches(actual))
    }

    fn describe(&self, out: &mut Description) {
        describe_joined(out, "any of ", " or ", &self.matchers);
    }
}

/// Conjunction over an ordered list of sub-matchers. Built by [`all_of`] or
/// the [`all_of!`](crate::all_of) macro.
pub struct AllOf<A: ?Sized> {
    matchers: Vec<Box<dyn Matcher<A>>>,
}

/// Match when every sub-matcher matches.
///
/// Sub-matchers are evaluated left to right and evaluation stops at the
/// first failure. The description joins sub-descriptions with `" and "` and
/// ends with a period.
///
/// # Example
///
/// ```rust
/// use attest::{all_of, assert_that, contains};
///
/// assert_that!(vec![4, 5], all_of!(contains(4), contains(5)));
/// ```
pub fn all_of<A: ?Sized>(matchers: Vec<Box<dyn Matcher<A>>>) -> AllOf<A> {
    AllOf { matchers }
}

impl<A: ?Sized> Matcher<A> for AllOf<A> {
    fn matches(&self, actual: &A) -> bool {
        self.matchers.iter().all(|m| m.matches(actual))
    }

    fn describe(&self, out: &mut Description) {
        describe_joined(out, "all of ", " and ", &self.matchers);
    }
}

fn describe_joined<A: ?Sized>(
    out: &mut Description,
    lead: &str,
    separator: &str,
    matchers: &[Box<dyn Matcher<A>>],
) {
    out.text(lead);
    for (i, matcher) in matchers.iter().enumerate() {
        if i > 0 {
            out.text(separator);
        }
        matcher.describe(out);
    }
    out.text(".");
}

/// Build an [`AnyOf`] from a heterogeneous list of matchers.
///
/// # Example
///
/// ```rust
/// use attest::{any_of, assert_that, contains, is_not};
///
/// assert_that!(vec![4, 5], is_not(any_of!(contains(2), contains(3))));
/// ```
#[macro_export]
macro_rules! any_of {
    ($($matcher:expr),+ $(,)?) => {
        $crate::any_of(vec![$(Box::new($matcher) as Box<dyn $crate::Matcher<_>>),+])
    };
}

/// Build an [`AllOf`] from a heterogeneous list of matchers.
///
/// # Example
///
/// ```rust
/// use attest::{all_of, assert_that, contains};
///
/// assert_that!(vec![4, 5], all_of!(contains(4), contains(5)));
/// ```
#[macro_export]
macro_rules! all_of {
    ($($matcher:expr),+ $(,)?) => {
        $crate::all_of(vec![$(Box::new($matcher) as Box<dyn $crate::Matcher<_>>),+])
    };
}

/// Lift of a single-value matcher over every element of a container. Built
/// by [`every_item`].
#[derive(Debug, Clone)]
pub struct EveryItem<M> {
    inner: M,
}

/// Match containers all of whose elements satisfy `inner`.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, every_item, is_not, less_than};
///
/// assert_that!(vec![1, 2, 3], every_item(less_than(4)));
/// assert_that!(vec![1, 2, 5], is_not(every_item(less_than(4))));
/// ```
pub fn every_item<M>(inner: M) -> EveryItem<M> {
    EveryItem { inner }
}

/// Historical alias for [`every_item`].
///
/// Despite the name, this has always meant "every element matches", not
/// "some element matches"; prefer [`every_item`], which says what it does.
#[deprecated(since = "0.3.0", note = "use `every_item`; the semantics are identical")]
pub fn contains_every<M>(inner: M) -> EveryItem<M> {
    every_item(inner)
}

impl<C, M> Matcher<C> for EveryItem<M>
where
    C: Iterable + ?Sized,
    M: Matcher<C::Item>,
{
    fn matches(&self, actual: &C) -> bool {
        actual.items().all(|item| self.inner.matches(item))
    }

    fn describe(&self, out: &mut Description) {
        out.text("every item ");
        self.inner.describe(out);
    }
}
