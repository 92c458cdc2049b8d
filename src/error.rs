//! Error types for indexed heap operations
//!
//! Every fallible queue operation reports one of the [`HeapError`] variants.
//! Errors are raised before the queue mutates, so a failed call leaves the
//! structure exactly as it was.

use std::fmt;

/// Error type for indexed heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The handle lies outside the fixed range `[0, capacity)`
    HandleOutOfRange {
        /// The offending handle
        handle: usize,
        /// The queue's fixed capacity
        capacity: usize,
    },
    /// The handle is already associated with a key (use `change_key` to update it)
    DuplicateHandle(usize),
    /// The handle is inside the valid range but currently holds no key
    HandleNotFound(usize),
    /// The queue is empty
    Underflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::HandleOutOfRange { handle, capacity } => {
                write!(f, "handle {} is outside the queue range 0..{}", handle, capacity)
            }
            HeapError::DuplicateHandle(handle) => {
                write!(f, "handle {} is already in the priority queue", handle)
            }
            HeapError::HandleNotFound(handle) => {
                write!(f, "handle {} is not in the priority queue", handle)
            }
            HeapError::Underflow => {
                write!(f, "priority queue underflow")
            }
        }
    }
}

impl std::error::Error for HeapError {}
