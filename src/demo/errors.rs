//! Error types for the memory region demo
//!
//! The demo has a single fatal condition: the heap request for the dynamic
//! buffer cannot be satisfied. It halts the run before anything is written.

use std::fmt;

/// Errors that end a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// The allocator refused (or could not describe) the heap request
    AllocationFailure { requested_bytes: usize, align: usize },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::AllocationFailure {
                requested_bytes,
                align,
            } => {
                write!(
                    f,
                    "failed to allocate memory: requested {} bytes (align {})",
                    requested_bytes, align
                )
            }
        }
    }
}

impl std::error::Error for DemoError {}
