//! Error types for container operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when removing
//! elements from the crate's containers.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the container kind that rejected the operation.
//! * **Minimal**: Removal from an empty container is the only failure mode in
//!   the crate; insertion cannot fail short of allocation failure, which is
//!   left to the global allocator's policy.
//! * **No-std**: Supports `no_std` environments; only `Display` formatting is
//!   needed, so no allocation is involved.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Every variant provides sufficient context for diagnosis without a
//!   backtrace.
//!
//! ## Non-goals
//!
//! * This module does not perform the emptiness checks itself.
//! * This module does not provide recovery or retry strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequentError {
    /// A destructive removal was attempted on a container with zero elements.
    EmptyContainer {
        /// Kind of container that was empty (e.g., "stack", "queue").
        container: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SequentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyContainer { container } => {
                write!(f, "Cannot remove from an empty {container}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for SequentError {}
