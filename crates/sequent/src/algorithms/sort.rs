//! Sorting and comparator utilities.
//!
//! ## Purpose
//!
//! This module provides comparator-driven sorting over slices, helpers for
//! building and composing comparators, and sortedness checks.
//!
//! ## Design notes
//!
//! * **Stability**: Both a stable and an unstable sort are offered. The
//!   stable variants preserve the relative order of elements the comparator
//!   considers equal; the unstable variants make no such guarantee and may
//!   be faster.
//! * **Copying and in-place**: Each variant exists as a copying function
//!   returning a fresh `Vec<T>` and as an in-place function mutating a
//!   `&mut [T]`.
//! * **Composition**: Multi-key orderings are built by chaining
//!   comparators with [`chained`] rather than hand-writing tie-breaking.
//!
//! ## Key concepts
//!
//! ### NaN policy for float sortedness
//!
//! NaN compares as unordered with every value, including itself, so a
//! sequence containing NaN has no defined order. [`is_sorted_floats`]
//! therefore never reports a sequence containing NaN as sorted. The check
//! scans for NaN explicitly: an adjacent-pair comparison alone would let a
//! single-element `[NaN]` slip through as trivially sorted.
//!
//! ## Invariants
//!
//! * For every adjacent pair (a, b) of a sorted result, `cmp(a, b)` is not
//!   `Greater`.
//! * Sorting is idempotent: sorting an already-sorted sequence is the
//!   identity.
//!
//! ## Non-goals
//!
//! * This module does not sort keys out-of-band (no cached key extraction);
//!   use `comparing` with a cheap key function instead.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Return a sorted copy of `seq`, preserving the relative order of elements
/// that `cmp` considers equal.
///
/// The input is never mutated.
///
/// ```rust
/// use sequent::prelude::*;
///
/// let data = [5, 2, 7, 3, 1, 8, 6, 4];
/// assert_eq!(sort_stable(&data, |a, b| a.cmp(b)), [1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(data[0], 5);
/// ```
#[inline]
pub fn sort_stable<T, F>(seq: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = seq.to_vec();
    sort_stable_in_place(&mut out, cmp);
    out
}

/// Return a sorted copy of `seq` with no guarantee about the relative order
/// of elements that `cmp` considers equal.
///
/// Typically faster than [`sort_stable`] and allocation-free internally;
/// use it when equal elements are indistinguishable.
#[inline]
pub fn sort_unstable<T, F>(seq: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = seq.to_vec();
    sort_unstable_in_place(&mut out, cmp);
    out
}

/// Sort `seq` in place, preserving the relative order of elements that
/// `cmp` considers equal.
#[inline]
pub fn sort_stable_in_place<T, F>(seq: &mut [T], cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    seq.sort_by(cmp);
}

/// Sort `seq` in place with no guarantee about the relative order of
/// elements that `cmp` considers equal.
#[inline]
pub fn sort_unstable_in_place<T, F>(seq: &mut [T], cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    seq.sort_unstable_by(cmp);
}

// ============================================================================
// Comparator Composition
// ============================================================================

/// Build a comparator from a key-extraction function.
///
/// Elements are ordered by the natural order of their keys.
///
/// ```rust
/// use sequent::prelude::*;
///
/// let by_len = comparing(|s: &&str| s.len());
/// let sorted = sort_stable(&["apple", "fig", "pear"], by_len);
/// assert_eq!(sorted, ["fig", "pear", "apple"]);
/// ```
#[inline]
pub fn comparing<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}

/// Compose two comparators: order by `primary`, breaking ties with
/// `secondary`.
///
/// Chains arbitrarily deep by nesting: the secondary comparator can itself
/// be the result of another `chained` call.
///
/// ```rust
/// use sequent::prelude::*;
///
/// let people = [("Jackson", "Michael"), ("Jackson", "Janet")];
/// let by_name = chained(
///     comparing(|p: &(&str, &str)| p.0),
///     comparing(|p: &(&str, &str)| p.1),
/// );
/// let sorted = sort_stable(&people, by_name);
/// assert_eq!(sorted, [("Jackson", "Janet"), ("Jackson", "Michael")]);
/// ```
#[inline]
pub fn chained<T, F, G>(primary: F, secondary: G) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
    G: Fn(&T, &T) -> Ordering,
{
    move |a, b| primary(a, b).then_with(|| secondary(a, b))
}

// ============================================================================
// Sortedness Checks
// ============================================================================

/// Check whether `seq` is sorted under `cmp`: no adjacent pair compares as
/// `Greater`.
///
/// Empty and single-element sequences are trivially sorted.
#[inline]
pub fn is_sorted_by<T, F>(seq: &[T], mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    seq.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}

/// Check whether a float sequence is sorted in ascending order.
///
/// Policy for NaN: a sequence containing NaN is never reported sorted,
/// because NaN is unordered with every value including itself. The scan is
/// explicit so that sequences like `[NaN]`, where no adjacent comparison
/// ever fails, are still rejected.
#[inline]
pub fn is_sorted_floats<T: Float>(seq: &[T]) -> bool {
    if seq.iter().any(|v| v.is_nan()) {
        return false;
    }
    seq.windows(2).all(|w| w[0] <= w[1])
}
