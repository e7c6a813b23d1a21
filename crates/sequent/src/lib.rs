//! # Sequent — sequence containers and ordering operations for Rust
//!
//! Small, allocation-only building blocks for ordered data: a LIFO
//! [`Stack`](prelude::Stack), a FIFO [`Queue`](prelude::Queue), and
//! comparator-driven sorting and filtering over slices.
//!
//! ## Quick Start
//!
//! ```rust
//! use sequent::prelude::*;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! // LIFO: the last push comes back first
//! assert_eq!(stack.pop()?, 3);
//!
//! let mut queue = Queue::new();
//! queue.enqueue("first");
//! queue.enqueue("second");
//!
//! // FIFO: the first enqueue comes back first
//! assert_eq!(queue.dequeue()?, "first");
//! # Result::<(), SequentError>::Ok(())
//! ```
//!
//! Sorting and filtering operate on slices and produce fresh vectors,
//! leaving their input untouched:
//!
//! ```rust
//! use sequent::prelude::*;
//!
//! let data = [5, 2, 7, 3, 1, 8, 6, 4];
//!
//! let sorted = sort_stable(&data, |a, b| a.cmp(b));
//! assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
//!
//! let evens = filter(&sorted, |n| n % 2 == 0);
//! assert_eq!(evens, [2, 4, 6, 8]);
//! ```
//!
//! Multi-key ordering composes comparators instead of hand-writing the
//! tie-breaking logic:
//!
//! ```rust
//! use sequent::prelude::*;
//!
//! let mut people = vec![("Jackson", "Michael"), ("Jackson", "Janet"), ("Austen", "Jane")];
//! let by_name = chained(comparing(|p: &(&str, &str)| p.0), comparing(|p: &(&str, &str)| p.1));
//! sort_stable_in_place(&mut people, by_name);
//! assert_eq!(people[0], ("Austen", "Jane"));
//! assert_eq!(people[1], ("Jackson", "Janet"));
//! ```
//!
//! ## Result and Error Handling
//!
//! Destructive removal from an empty container is the only failure mode in
//! the crate. [`Stack::pop`](prelude::Stack::pop) and
//! [`Queue::dequeue`](prelude::Queue::dequeue) return
//! `Result<T, SequentError>`, so the `?` operator is idiomatic:
//!
//! ```rust
//! use sequent::prelude::*;
//!
//! let mut stack: Stack<i32> = Stack::new();
//!
//! match stack.pop() {
//!     Ok(top) => println!("popped {top}"),
//!     Err(e) => eprintln!("nothing to pop: {e}"),
//! }
//! ```
//!
//! Non-destructive accessors (`peek`, `front`, `back`) return `Option<&T>`
//! instead: an empty container is an ordinary answer there, not an error.
//!
//! ## Concurrency
//!
//! Containers are single-owner, single-threaded values. They hold no
//! interior synchronization; wrap them in a `Mutex` (or hand out `&mut`
//! exclusively) if shared access is needed.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments, requiring only `alloc`.
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! sequent = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Containers - LIFO and FIFO sequence containers.
mod containers;

// Layer 3: Algorithms - sorting and filtering over slices.
mod algorithms;

// Standard sequent prelude.
pub mod prelude {
    pub use crate::algorithms::filter::{filter, filter_into};
    pub use crate::algorithms::sort::{
        chained, comparing, is_sorted_by, is_sorted_floats, sort_stable, sort_stable_in_place,
        sort_unstable, sort_unstable_in_place,
    };
    pub use crate::containers::queue::Queue;
    pub use crate::containers::stack::Stack;
    pub use crate::primitives::errors::SequentError;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod containers {
        pub use crate::containers::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
}
