//! Tests for predicate filtering.
//!
//! These tests verify the filtering contract:
//! - Exactly the matching subset is returned
//! - Original relative order is preserved
//! - The input is never mutated
//! - Buffer-reusing variant matches the allocating variant
//!
//! ## Test Organization
//!
//! 1. **Basic Filtering** - Matching subset in original order
//! 2. **Sorted Input** - Filtering after a prior sort
//! 3. **Edge Cases** - Empty input, all-match, none-match
//! 4. **Buffer Reuse** - filter_into semantics and capacity reuse

use sequent::prelude::*;

// ============================================================================
// Basic Filtering Tests
// ============================================================================

/// Test filtering unsorted input for even numbers.
///
/// Verifies the matching subset appears in original encounter order and
/// the input is untouched.
#[test]
fn test_filter_unsorted_evens() {
    let data = [5, 2, 7, 3, 1, 8, 6, 4];

    let evens = filter(&data, |n| n % 2 == 0);

    assert_eq!(evens, [2, 8, 6, 4]);
    assert_eq!(data, [5, 2, 7, 3, 1, 8, 6, 4], "input must not be mutated");
}

/// Test filtering with a predicate over a non-Copy type.
///
/// Verifies elements are cloned, not moved, out of the input.
#[test]
fn test_filter_clones_elements() {
    let words = vec![String::from("ant"), String::from("bee"), String::from("cricket")];

    let short = filter(&words, |w| w.len() <= 3);

    assert_eq!(short, ["ant", "bee"]);
    assert_eq!(words.len(), 3);
}

// ============================================================================
// Sorted Input Tests
// ============================================================================

/// Test filtering a freshly sorted sequence.
///
/// Verifies the evens of the sorted sequence come out in ascending order.
#[test]
fn test_filter_after_sort() {
    let data = [5, 2, 7, 3, 1, 8, 6, 4];

    let sorted = sort_stable(&data, |a, b| a.cmp(b));
    assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);

    let evens = filter(&sorted, |n| n % 2 == 0);
    assert_eq!(evens, [2, 4, 6, 8]);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test filtering edge cases.
///
/// Verifies empty input, a predicate matching everything, and a predicate
/// matching nothing.
#[test]
fn test_filter_edge_cases() {
    let empty: [i32; 0] = [];
    assert_eq!(filter(&empty, |_| true), Vec::<i32>::new());

    let data = [1, 2, 3];
    assert_eq!(filter(&data, |_| true), [1, 2, 3]);
    assert_eq!(filter(&data, |_| false), Vec::<i32>::new());
}

// ============================================================================
// Buffer Reuse Tests
// ============================================================================

/// Test filter_into matches filter and clears the output first.
///
/// Verifies leftover contents from a previous call never leak through.
#[test]
fn test_filter_into_semantics() {
    let data = [5, 2, 7, 3, 1, 8, 6, 4];
    let mut out = vec![99, 99, 99];

    filter_into(&data, |n| n % 2 == 0, &mut out);
    assert_eq!(out, filter(&data, |n| n % 2 == 0));

    // Second call with a stricter predicate fully replaces the contents
    filter_into(&data, |n| *n > 6, &mut out);
    assert_eq!(out, [7, 8]);
}

/// Test filter_into reuses the output buffer's capacity.
///
/// Verifies no reallocation happens when the buffer is already large enough.
#[test]
fn test_filter_into_reuses_capacity() {
    let data = [1, 2, 3, 4];
    let mut out: Vec<i32> = Vec::with_capacity(64);
    let before = out.capacity();

    filter_into(&data, |_| true, &mut out);

    assert_eq!(out, [1, 2, 3, 4]);
    assert_eq!(out.capacity(), before);
}
