//! Integration tests exercising the public matcher API end to end.

use attest::output::{FallibleOutput, StructuredOutput};
use attest::{
    all_of, any_of, assert_that, check_that, close_to, contains, empty, equal_to,
    equal_to_ignoring_whitespace, ends_with, every_item, is, is_not, less_than, matches_pattern,
    one_of, starts_with,
};
use proptest::prelude::*;

#[test]
fn equal_values_match_and_unequal_values_do_not() {
    assert_that!(5, is(equal_to(5)));
    assert_that!(5, is_not(equal_to(6)));
    assert_that!(6, is(is_not(equal_to(5))));
}

#[test]
fn ordered_sequences_compare_by_position_sets_by_membership() {
    use std::collections::HashSet;

    assert_that!(vec![1, 2, 3], is_not(equal_to(vec![3, 2, 1])));

    let left: HashSet<i32> = [1, 2, 3].into_iter().collect();
    let right: HashSet<i32> = [3, 1, 2].into_iter().collect();
    assert_that!(left, is(equal_to(right)));
}

#[test]
fn containment_scans_linearly() {
    assert_that!(vec![3, 5, 6, 1], contains(6));
    assert_that!(vec![3, 5, 1], is_not(contains(6)));
}

#[test]
fn combinators_short_circuit_in_order() {
    assert_that!(vec![4, 5], all_of!(contains(4), contains(5)));
    assert_that!(vec![4, 5], is_not(all_of!(contains(4), contains(6))));
    assert_that!(vec![4, 5], any_of!(contains(4), contains(3), contains(6)));
    assert_that!(vec![4, 5], is_not(any_of!(contains(2), contains(3), contains(6))));
}

#[test]
fn close_to_respects_tolerance() {
    assert_that!(0.98, close_to(1.0, 0.03));
    assert_that!(0.90, is_not(close_to(1.0, 0.03)));
}

#[test]
fn pattern_matching_covers_the_whole_string() {
    assert_that!("12345", matches_pattern("[0-9]+"));
    assert_that!("12345a", is_not(matches_pattern("[0-9]+")));
}

#[test]
fn oversized_needles_fail_cleanly() {
    assert_that!("ab", is_not(ends_with("Notes")));
    assert_that!("ab", is_not(starts_with("Notes")));
}

#[test]
fn whitespace_insensitive_equality() {
    assert_that!("   my\tfoo  bar ", equal_to_ignoring_whitespace(" my  foo bar"));
}

#[test]
fn one_of_membership() {
    assert_that!(2, one_of([1, 2, 3]));
    assert_that!(4, is_not(one_of([1, 2, 3])));
}

#[test]
fn empty_checks_size() {
    assert_that!(Vec::<i32>::new(), empty());
    assert_that!(vec![1], is_not(empty()));
}

#[test]
fn every_item_lifts_a_matcher_over_elements() {
    assert_that!(vec![1, 2, 3], every_item(less_than(10)));
    assert_that!(vec![1, 20, 3], is_not(every_item(less_than(10))));
}

#[test]
fn structured_failures_carry_the_golden_message() {
    let result = assert_that(&"bar", &is_not(equal_to("bar")), &StructuredOutput);
    assert!(!result.is_pass());
    assert_eq!(
        result.message.unwrap(),
        "Expected: not \"bar\"\n but got: \"bar\""
    );
}

#[test]
fn fallible_failures_round_trip_through_display() {
    let err = assert_that(&7, &is(equal_to(8)), &FallibleOutput).unwrap_err();
    assert_eq!(err.expected, "is 8");
    assert_eq!(err.actual, "7");
    assert_eq!(err.to_string(), "Expected: is 8\n but got: 7");
}

#[test]
fn check_that_returns_a_plain_bool() {
    assert!(check_that(&vec![4, 5], &contains(4)));
    assert!(!check_that(&vec![4, 5], &contains(6)));
}

#[test]
#[should_panic(expected = "Expected: is 8\n but got: 7")]
fn macro_failures_panic_with_the_golden_message() {
    assert_that!(7, is(equal_to(8)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Reflexivity: every value equals itself under `equal_to`.
    #[test]
    fn equal_to_is_reflexive(x in any::<i64>()) {
        prop_assert!(check_that(&x, &equal_to(x)));
    }

    /// Negation inverts the result for distinct values.
    #[test]
    fn is_not_inverts_equal_to(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        prop_assert!(!check_that(&b, &equal_to(a)));
        prop_assert!(check_that(&b, &is_not(equal_to(a))));
    }

    /// Membership through `contains` agrees with the standard library.
    #[test]
    fn contains_agrees_with_std(haystack in prop::collection::vec(any::<i32>(), 0..20), needle in any::<i32>()) {
        let expected = haystack.contains(&needle);
        prop_assert_eq!(check_that(&haystack, &contains(needle)), expected);
    }

    /// Re-evaluating a matcher any number of times yields the same result.
    #[test]
    fn evaluation_is_idempotent(haystack in prop::collection::vec(any::<i32>(), 0..10), needle in any::<i32>()) {
        let matcher = contains(needle);
        let first = check_that(&haystack, &matcher);
        for _ in 0..10 {
            prop_assert_eq!(check_that(&haystack, &matcher), first);
        }
    }

    /// Ordering matchers agree with the native comparison operators.
    #[test]
    fn ordering_matchers_agree_with_native_ordering(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(check_that(&a, &less_than(b)), a < b);
    }

    /// `every_item` holds exactly when no element refutes the inner matcher.
    #[test]
    fn every_item_agrees_with_all(items in prop::collection::vec(any::<i32>(), 0..20), bound in any::<i32>()) {
        let expected = items.iter().all(|x| *x < bound);
        prop_assert_eq!(check_that(&items, &every_item(less_than(bound))), expected);
    }
}
