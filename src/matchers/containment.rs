//! Containment matchers: membership, keys, candidate sets, and emptiness.

use std::fmt;

use crate::capability::{EqualityComparable, Iterable, KeyValueIterable};
use crate::description::Description;
use crate::matcher::Matcher;

/// Matcher testing that a container holds an item (or a string holds a
/// substring). Built by [`contains`].
#[derive(Debug, Clone)]
pub struct Contains<E> {
    item: E,
}

/// Match containers holding an element equal to `item`.
///
/// The scan is linear over the container's iteration order. When the actual
/// value is textual the expected value is treated as a substring instead.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, contains, is_not};
///
/// assert_that!(vec![3, 5, 6, 1], contains(6));
/// assert_that!(vec![3, 5, 1], is_not(contains(6)));
/// assert_that!("hello world", contains("lo wo"));
/// ```
pub fn contains<E>(item: E) -> Contains<E> {
    Contains { item }
}

impl<E, C> Matcher<C> for Contains<E>
where
    C: Iterable + ?Sized,
    E: EqualityComparable<C::Item> + fmt::Debug,
{
    fn matches(&self, actual: &C) -> bool {
        actual.items().any(|element| self.item.eq_value(element))
    }

    fn describe(&self, out: &mut Description) {
        out.text("contains ").value(&self.item);
    }
}

// Substring form: strings are not Iterable, so these do not overlap the
// container impl.

impl<E: AsRef<str> + fmt::Debug> Matcher<str> for Contains<E> {
    fn matches(&self, actual: &str) -> bool {
        actual.contains(self.item.as_ref())
    }

    fn describe(&self, out: &mut Description) {
        out.text("contains ").value(self.item.as_ref());
    }
}

impl<E: AsRef<str> + fmt::Debug> Matcher<String> for Contains<E> {
    fn matches(&self, actual: &String) -> bool {
        actual.contains(self.item.as_ref())
    }

    fn describe(&self, out: &mut Description) {
        out.text("contains ").value(self.item.as_ref());
    }
}

impl<'a, E: AsRef<str> + fmt::Debug> Matcher<&'a str> for Contains<E> {
    fn matches(&self, actual: &&'a str) -> bool {
        actual.contains(self.item.as_ref())
    }

    fn describe(&self, out: &mut Description) {
        out.text("contains ").value(self.item.as_ref());
    }
}

/// Matcher testing that a key/value container holds a given entry.
///
/// Built by [`contains_entry`].
#[derive(Debug, Clone)]
pub struct ContainsEntry<K, V> {
    key: K,
    value: V,
}

/// Match associative containers holding the entry `(key, value)`.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, contains_entry, is_not};
/// use std::collections::HashMap;
///
/// let mut ages = HashMap::new();
/// ages.insert("alice", 34);
/// assert_that!(ages, contains_entry("alice", 34));
/// assert_that!(ages, is_not(contains_entry("alice", 35)));
/// ```
pub fn contains_entry<K, V>(key: K, value: V) -> ContainsEntry<K, V> {
    ContainsEntry { key, value }
}

impl<K, V, M> Matcher<M> for ContainsEntry<K, V>
where
    M: KeyValueIterable,
    K: EqualityComparable<M::Key> + fmt::Debug,
    V: EqualityComparable<M::Value> + fmt::Debug,
{
    fn matches(&self, actual: &M) -> bool {
        actual
            .entries()
            .any(|(k, v)| self.key.eq_value(k) && self.value.eq_value(v))
    }

    fn describe(&self, out: &mut Description) {
        out.text("contains entry (")
            .value(&self.key)
            .text(", ")
            .value(&self.value)
            .text(")");
    }
}

/// Matcher testing that a key/value container holds a given key.
///
/// Built by [`has_key`].
#[derive(Debug, Clone)]
pub struct HasKey<K> {
    key: K,
}

/// Match associative containers holding `key`.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, has_key, is_not};
/// use std::collections::BTreeMap;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("alice", 10);
/// assert_that!(scores, has_key("alice"));
/// assert_that!(scores, is_not(has_key("bob")));
/// ```
pub fn has_key<K>(key: K) -> HasKey<K> {
    HasKey { key }
}

impl<K, M> Matcher<M> for HasKey<K>
where
    M: KeyValueIterable,
    K: EqualityComparable<M::Key> + fmt::Debug,
{
    fn matches(&self, actual: &M) -> bool {
        actual.entries().any(|(k, _)| self.key.eq_value(k))
    }

    fn describe(&self, out: &mut Description) {
        out.text("has key ").value(&self.key);
    }
}

/// Matcher testing membership in a fixed candidate set. Built by [`one_of`]
/// and [`is_in`].
#[derive(Debug, Clone)]
pub struct OneOf<E> {
    candidates: Vec<E>,
}

/// Match values equal to some element of `candidates`.
///
/// The candidates are copied into the matcher at construction, so array and
/// iterator arguments both work and the matcher outlives its source.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, is_not, one_of};
///
/// assert_that!(2, one_of([1, 2, 3]));
/// assert_that!(4, is_not(one_of([1, 2, 3])));
/// ```
pub fn one_of<E>(candidates: impl IntoIterator<Item = E>) -> OneOf<E> {
    OneOf {
        candidates: candidates.into_iter().collect(),
    }
}

/// Match values contained in `collection`.
///
/// Symmetric to [`contains`] with the operands swapped; otherwise identical
/// to [`one_of`].
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, is_in};
///
/// assert_that!("b", is_in(["a", "b", "c"]));
/// ```
pub fn is_in<E>(collection: impl IntoIterator<Item = E>) -> OneOf<E> {
    one_of(collection)
}

impl<E, A> Matcher<A> for OneOf<E>
where
    A: ?Sized,
    E: EqualityComparable<A> + fmt::Debug,
{
    fn matches(&self, actual: &A) -> bool {
        self.candidates.iter().any(|c| c.eq_value(actual))
    }

    fn describe(&self, out: &mut Description) {
        out.text("one of ").value(&self.candidates);
    }
}

/// Matcher testing that a container has no elements. Built by [`empty`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Match containers of size zero.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, empty, is_not};
///
/// assert_that!(Vec::<i32>::new(), empty());
/// assert_that!(vec![1], is_not(empty()));
/// ```
pub fn empty() -> Empty {
    Empty
}

impl<C: Iterable + ?Sized> Matcher<C> for Empty {
    fn matches(&self, actual: &C) -> bool {
        actual.count_items() == 0
    }

    fn describe(&self, out: &mut Description) {
        out.text("an empty container");
    }
}

/// Matcher testing that a string has no characters. Built by
/// [`empty_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyString;

/// Match strings of length zero.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, empty_string, is_not};
///
/// assert_that!("", empty_string());
/// assert_that!("x", is_not(empty_string()));
/// ```
pub fn empty_string() -> EmptyString {
    EmptyString
}

impl<A: AsRef<str> + ?Sized> Matcher<A> for EmptyString {
    fn matches(&self, actual: &A) -> bool {
        actual.as_ref().is_empty()
    }

    fn describe(&self, out: &mut Description) {
        out.text("an empty string");
    }
}
