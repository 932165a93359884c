//! Capability traits: compile-time facts about a type.
//!
//! Every matcher in the catalog selects its comparison strategy through one
//! of these traits, so a policy applied to a type lacking the capability is
//! rejected when the generic instantiates, never at match time.
//!
//! Equality dispatch is an ordered chain:
//!
//! 1. If the type has native equality (`PartialEq`), the blanket impl of
//!    [`EqualityComparable`] uses it.
//! 2. Otherwise, a plain aggregate can opt into byte-wise comparison with
//!    [`equality_by_layout!`], which marks it [`FixedLayout`] and derives a
//!    `PartialEq` that compares with [`byte_eq`]. Coherence forbids taking
//!    the macro on a type that already has `PartialEq`, so native equality
//!    always wins.
//! 3. A type with neither fails to compile at the `equal_to` call site.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::mem;

// =============================================================================
// Equality
// =============================================================================

/// Capability: values of `Self` can be tested for equality against `Rhs`.
///
/// The `Rhs` parameter mirrors `PartialEq`'s, so a matcher built from a
/// `&str` can be tested against a `String`, a `Vec<T>` against a `[T; N]`,
/// and so on.
pub trait EqualityComparable<Rhs: ?Sized = Self> {
    /// Native or byte-wise equality, per the dispatch chain above.
    fn eq_value(&self, other: &Rhs) -> bool;
}

impl<Rhs: ?Sized, T: PartialEq<Rhs> + ?Sized> EqualityComparable<Rhs> for T {
    fn eq_value(&self, other: &Rhs) -> bool {
        PartialEq::eq(self, other)
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Capability: values of `Self` admit a native less-than test against `Rhs`.
pub trait OrderingComparable<Rhs: ?Sized = Self> {
    /// The relative ordering of `self` and `other`, if one exists.
    fn cmp_value(&self, other: &Rhs) -> Option<Ordering>;
}

impl<Rhs: ?Sized, T: PartialOrd<Rhs> + ?Sized> OrderingComparable<Rhs> for T {
    fn cmp_value(&self, other: &Rhs) -> Option<Ordering> {
        self.partial_cmp(other)
    }
}

// =============================================================================
// Byte-wise fallback
// =============================================================================

/// Marker for plain aggregates comparable byte-for-byte.
///
/// # Safety
///
/// Implementors must be `Copy` types with no padding bytes and no
/// indirection (no pointers, references, or heap handles), so that every
/// byte of the value is initialized and equality of bytes implies equality
/// of values. Prefer [`equality_by_layout!`] over implementing this
/// directly.
pub unsafe trait FixedLayout: Copy {}

/// Compare two fixed-layout values byte-for-byte.
pub fn byte_eq<T: FixedLayout>(a: &T, b: &T) -> bool {
    fn bytes<T>(value: &T) -> &[u8] {
        // Safe for FixedLayout types: every byte is initialized.
        unsafe { std::slice::from_raw_parts(value as *const T as *const u8, mem::size_of::<T>()) }
    }
    bytes(a) == bytes(b)
}

/// Opt a plain-aggregate type into byte-wise equality matching.
///
/// This is branch 2 of the equality dispatch chain: it implements
/// [`FixedLayout`] and a byte-wise `PartialEq` for each named type, which
/// [`EqualityComparable`] then picks up through its blanket impl. The type
/// must not already implement `PartialEq` (native equality takes priority,
/// and the compiler rejects the conflicting impls).
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, equal_to, equality_by_layout};
///
/// #[derive(Debug, Clone, Copy)]
/// struct RawFlags {
///     bits: u32,
/// }
///
/// equality_by_layout!(RawFlags);
///
/// assert_that!(RawFlags { bits: 3 }, equal_to(RawFlags { bits: 3 }));
/// ```
#[macro_export]
macro_rules! equality_by_layout {
    ($($ty:ty),+ $(,)?) => {$(
        unsafe impl $crate::capability::FixedLayout for $ty {}

        impl ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::capability::byte_eq(self, other)
            }
        }
    )+};
}

// =============================================================================
// Container traversal
// =============================================================================

/// Capability: `Self` is a container traversable element by element.
pub trait Iterable {
    /// The element type yielded by traversal.
    type Item;

    /// Visit the elements in the container's iteration order.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// Number of elements held.
    fn count_items(&self) -> usize;
}

impl<T> Iterable for Vec<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn count_items(&self) -> usize {
        self.len()
    }
}

impl<T> Iterable for [T] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn count_items(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Iterable for [T; N] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn count_items(&self) -> usize {
        N
    }
}

impl<T> Iterable for VecDeque<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn count_items(&self) -> usize {
        self.len()
    }
}

impl<T, S> Iterable for HashSet<T, S> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn count_items(&self) -> usize {
        self.len()
    }
}

impl<T> Iterable for BTreeSet<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn count_items(&self) -> usize {
        self.len()
    }
}

/// Capability: iterating `Self` yields key/value pairs.
pub trait KeyValueIterable {
    /// The key half of each entry.
    type Key;
    /// The value half of each entry.
    type Value;

    /// Visit the entries in the container's iteration order.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K, V, S> KeyValueIterable for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V> KeyValueIterable for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

// =============================================================================
// Floating point
// =============================================================================

/// Capability: `Self` is a real (floating-point) numeric type.
///
/// `close_to` is bounded by this trait, which only `f32` and `f64`
/// implement; applying it to an integer type is a compile error.
pub trait Real: Copy + PartialOrd + fmt::Debug {
    /// The absolute difference between two values.
    fn abs_diff(self, other: Self) -> Self;
}

impl Real for f32 {
    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }
}

impl Real for f64 {
    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No derived PartialEq: equality comes from the byte-layout macro.
    #[derive(Debug, Clone, Copy)]
    struct Opaque {
        a: u32,
        b: u32,
    }

    equality_by_layout!(Opaque);

    #[test]
    fn test_native_equality_wins_for_partialeq_types() {
        assert!(5.eq_value(&5));
        assert!(!5.eq_value(&6));
        assert!("abc".eq_value(&String::from("abc")));
    }

    #[test]
    fn test_byte_layout_equality() {
        let x = Opaque { a: 1, b: 2 };
        let y = Opaque { a: 1, b: 2 };
        let z = Opaque { a: 1, b: 3 };
        assert!(x.eq_value(&y));
        assert!(!x.eq_value(&z));
    }

    #[test]
    fn test_ordering_capability() {
        assert_eq!(3.cmp_value(&5), Some(Ordering::Less));
        assert_eq!(f64::NAN.cmp_value(&1.0), None);
    }

    #[test]
    fn test_iterable_counts() {
        assert_eq!(vec![1, 2, 3].count_items(), 3);
        assert_eq!([0u8; 4].count_items(), 4);
        let set: BTreeSet<i32> = [1, 2].into_iter().collect();
        assert_eq!(set.count_items(), 2);
    }

    #[test]
    fn test_key_value_entries() {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        let keys: Vec<&&str> = map.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, [&"a", &"b"]);
    }
}
