//! # attest
//!
//! Composable matchers with self-describing failure messages, for use
//! inside unit-test assertions.
//!
//! A matcher is a small immutable predicate object ("equal to 5",
//! "contains 6", "starts with \"release\"") that knows both how to test an
//! actual value and how to describe itself when the test fails. Matchers
//! combine through logical combinators and are evaluated through a single
//! entry point whose failure behavior (print, panic, `Result`, structured
//! value) is a pluggable output adapter.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::{assert_that, contains, equal_to, is, is_not};
//!
//! #[derive(Debug, PartialEq)]
//! struct Port(u16);
//!
//! assert_that!(Port(80), is(equal_to(Port(80))));
//! assert_that!(vec![3, 5, 6, 1], contains(6));
//! assert_that!("foo", is_not(equal_to("bar")));
//! ```
//!
//! A failed assertion panics with the matcher's own description:
//!
//! ```text
//! Expected: is not "bar"
//!  but got: "bar"
//! ```
//!
//! ## Combining matchers
//!
//! ```rust
//! use attest::{all_of, any_of, assert_that, contains, every_item, less_than};
//!
//! assert_that!(vec![4, 5], all_of!(contains(4), contains(5)));
//! assert_that!(vec![4, 5], any_of!(contains(4), contains(9)));
//! assert_that!(vec![1, 2, 3], every_item(less_than(4)));
//! ```
//!
//! ## Choosing how failures are reported
//!
//! The `assert_that!` macro panics, which is what Rust's test framework
//! expects. Hosts that want something else pass an adapter explicitly:
//!
//! ```rust
//! use attest::{assert_that, equal_to, output::StructuredOutput};
//!
//! let result = assert_that(&5, &equal_to(6), &StructuredOutput);
//! assert!(!result.is_pass());
//! ```
//!
//! ## Capability dispatch
//!
//! Matchers resolve their comparison strategy through the traits in
//! [`capability`]: native `PartialEq`/`PartialOrd` where a type has them, an
//! opt-in byte-wise fallback for plain aggregates
//! ([`equality_by_layout!`]), and a compile error where neither applies.
//! Misapplied matchers (`close_to` on an integer, `equal_to` on an
//! incomparable type) fail to compile instead of silently mismatching.

pub mod assert;
pub mod capability;
pub mod description;
pub mod error;
pub mod matcher;
pub mod matchers;
pub mod output;

// Core contract
pub use description::Description;
pub use matcher::{description_of, Matcher};

// Matcher catalog
#[allow(deprecated)]
pub use matchers::contains_every;
pub use matchers::{
    all_of, any_of, close_to, contains, contains_entry, empty, empty_string, ends_with, equal_to,
    equal_to_ignoring_case, equal_to_ignoring_whitespace, every_item, greater_than,
    greater_than_or_equal_to, has_key, is, is_in, is_not, less_than, less_than_or_equal_to,
    matches_pattern, null, one_of, starts_with, try_matches_pattern,
};

// Assertion entry points
pub use assert::{assert_that, check_that};

// Output adapters and errors
pub use error::{AssertionError, PatternError};
pub use output::{MatchResult, OutputAdapter};
