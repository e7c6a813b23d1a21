//! FIFO queue container.
//!
//! ## Purpose
//!
//! This module provides [`Queue<T>`], a first-in-first-out container with
//! insertion at the back and removal from the front.
//!
//! ## Design notes
//!
//! * **Storage**: Backed by a `VecDeque<T>` ring buffer, so both `enqueue`
//!   and `dequeue` are amortized O(1). A contiguous array that rebuilds
//!   itself on every front removal would pay O(n) per dequeue; the ring
//!   buffer avoids that entirely.
//! * **Ownership**: The queue exclusively owns its elements; dropping the
//!   queue drops every element still inside it.
//! * **Errors**: `dequeue` on an empty queue returns
//!   [`SequentError::EmptyContainer`]; it never reads out of bounds and
//!   never panics on emptiness.
//!
//! ## Invariants
//!
//! * Elements are dequeued in the exact order they were enqueued: after
//!   enqueues e1..en, n dequeues yield e1..en.
//!
//! ## Non-goals
//!
//! * No interior synchronization; wrap the queue externally for shared use.
//! * No bounded capacity or eviction; growth is limited only by memory.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::vec_deque::{Iter, VecDeque};
#[cfg(feature = "std")]
use std::collections::vec_deque::{Iter, VecDeque};

// Internal dependencies
use crate::primitives::errors::SequentError;

// ============================================================================
// Queue
// ============================================================================

/// A FIFO container: elements come back out in the order they went in.
///
/// ```rust
/// use sequent::prelude::*;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.dequeue()?, 2);
/// assert!(queue.dequeue().is_err());
/// # Result::<(), SequentError>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    /// Ring-buffer storage; the front of the queue is the front of the deque.
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create a new, empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create a new, empty queue with room for at least `capacity` elements
    /// before reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Append `item` at the back of the queue.
    ///
    /// Amortized O(1); cannot fail.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front element.
    ///
    /// Returns [`SequentError::EmptyContainer`] when the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T, SequentError> {
        self.items
            .pop_front()
            .ok_or(SequentError::EmptyContainer { container: "queue" })
    }

    /// Borrow the front element without removing it, or `None` when empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Borrow the back element without removing it, or `None` when empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Number of elements currently in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every element, preserving allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate the elements from the front of the queue to the back.
    ///
    /// The first item yielded is the one `dequeue` would return next.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    /// Enqueue every item of `iter`, in iteration order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = <VecDeque<T> as IntoIterator>::IntoIter;

    /// Consume the queue, yielding elements from the front to the back.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
