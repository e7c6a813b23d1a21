//! Predicate filtering.
//!
//! ## Purpose
//!
//! This module provides order-preserving subset extraction: a new sequence
//! containing exactly the elements of the input for which a predicate
//! returns true.
//!
//! ## Design notes
//!
//! * **Non-mutating**: The input slice is never modified; matching elements
//!   are cloned into the output.
//! * **Order-preserving**: Matching elements appear in their original
//!   relative order.
//! * **Buffer reuse**: [`filter_into`] writes into a caller-supplied vector,
//!   reusing its capacity across repeated calls.
//!
//! ## Non-goals
//!
//! * No failure conditions beyond the predicate's own well-definedness.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Filtering Functions
// ============================================================================

/// Return a new sequence of exactly the elements of `seq` satisfying
/// `pred`, in their original relative order.
///
/// ```rust
/// use sequent::prelude::*;
///
/// let data = [5, 2, 7, 3, 1, 8, 6, 4];
/// assert_eq!(filter(&data, |n| n % 2 == 0), [2, 8, 6, 4]);
/// assert_eq!(data.len(), 8);
/// ```
#[inline]
pub fn filter<T, P>(seq: &[T], mut pred: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|&item| pred(item)).cloned().collect()
}

/// Filter `seq` into `out`, clearing it first and reusing its capacity.
///
/// Semantics are identical to [`filter`]; this variant avoids a fresh
/// allocation when filtering repeatedly into the same buffer.
#[inline]
pub fn filter_into<T, P>(seq: &[T], mut pred: P, out: &mut Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    out.clear();
    out.extend(seq.iter().filter(|&item| pred(item)).cloned());
}
