//! LIFO stack container.
//!
//! ## Purpose
//!
//! This module provides [`Stack<T>`], a last-in-first-out container with a
//! single access point at the top.
//!
//! ## Design notes
//!
//! * **Storage**: Backed by a `Vec<T>` whose last element is the top, so
//!   `push` and `pop` are amortized O(1) with no pointer indirection.
//! * **Ownership**: The stack exclusively owns its elements; dropping the
//!   stack drops every element still inside it.
//! * **Errors**: `pop` on an empty stack returns
//!   [`SequentError::EmptyContainer`]; it never reads out of bounds and
//!   never panics on emptiness.
//!
//! ## Invariants
//!
//! * The most recently pushed, not-yet-popped element is always the next
//!   one returned by `pop`: after pushes p1..pn, n pops yield pn..p1.
//!
//! ## Non-goals
//!
//! * No interior synchronization; wrap the stack externally for shared use.
//! * No bounded capacity; growth is limited only by memory.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SequentError;

// ============================================================================
// Stack
// ============================================================================

/// A LIFO container: elements come back out in the reverse of the order
/// they went in.
///
/// ```rust
/// use sequent::prelude::*;
///
/// let mut stack = Stack::new();
/// stack.push("bottom");
/// stack.push("top");
///
/// assert_eq!(stack.pop()?, "top");
/// assert_eq!(stack.pop()?, "bottom");
/// assert!(stack.pop().is_err());
/// # Result::<(), SequentError>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    /// Element storage; the top of the stack is the last element.
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create a new, empty stack.
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a new, empty stack with room for at least `capacity` elements
    /// before reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Push `item` onto the top of the stack.
    ///
    /// Amortized O(1); cannot fail.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top element.
    ///
    /// Returns [`SequentError::EmptyContainer`] when the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, SequentError> {
        self.items
            .pop()
            .ok_or(SequentError::EmptyContainer { container: "stack" })
    }

    /// Borrow the top element without removing it, or `None` when empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Mutably borrow the top element without removing it, or `None` when empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Number of elements currently on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the stack can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drop every element, preserving allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate the elements from the bottom of the stack to the top.
    ///
    /// The last item yielded is the one `pop` would return next.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    /// Push every item of `iter`, in iteration order. The last item of the
    /// iterator becomes the new top.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    /// Consume the stack, yielding elements from the bottom to the top.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
