//! Layer 2: Containers
//!
//! # Purpose
//!
//! This layer provides the sequence containers: a LIFO stack and a FIFO
//! queue. Both are single-owner, single-threaded values with no interior
//! synchronization.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Containers ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// LIFO stack.
pub mod stack;

/// FIFO queue.
pub mod queue;
