//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared primitive types used throughout the
//! crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Containers
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;
