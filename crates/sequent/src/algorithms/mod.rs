//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the free operations over slices: comparator-driven
//! sorting (stable and unstable), comparator composition, sortedness
//! checks, and predicate filtering.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Containers
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sorting and comparator utilities.
pub mod sort;

/// Predicate filtering.
pub mod filter;
