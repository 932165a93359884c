//! The matcher catalog.
//!
//! One factory function per predicate, each returning an immutable matcher
//! value. Combinators (`is`, `is_not`, `any_of`, `all_of`, `every_item`)
//! compose matchers from other matchers.
//!
//! # Example
//!
//! ```rust
//! use attest::{assert_that, contains, equal_to, is, is_not, one_of};
//!
//! assert_that!(vec![3, 5, 6, 1], contains(6));
//! assert_that!(2, is(one_of([1, 2, 3])));
//! assert_that!("foo", is_not(equal_to("bar")));
//! ```

mod combinators;
mod containment;
mod equality;
mod numeric;
mod ordering;
mod string;

pub use combinators::{all_of, any_of, every_item, is, is_not, AllOf, AnyOf, EveryItem, Is, IsNot};
#[allow(deprecated)]
pub use combinators::contains_every;
pub use containment::{
    contains, contains_entry, empty, empty_string, has_key, is_in, one_of, Contains, ContainsEntry,
    Empty, EmptyString, HasKey, OneOf,
};
pub use equality::{
    equal_to, equal_to_ignoring_case, equal_to_ignoring_whitespace, null, EqualTo,
    EqualToIgnoringCase, EqualToIgnoringWhitespace, Null,
};
pub use numeric::{close_to, CloseTo};
pub use ordering::{
    greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, OrderingMatcher,
};
pub use string::{
    ends_with, matches_pattern, starts_with, try_matches_pattern, EndsWith, MatchesPattern,
    StartsWith,
};
