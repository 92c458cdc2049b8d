//! Indexed Minimum-Priority Queue for Rust
//!
//! This crate provides a fixed-capacity binary min-heap whose elements are
//! identified by small integer handles chosen by the caller, giving
//! handle-based `change_key` and `delete` in O(log n) on top of the usual
//! insert/peek/extract-min operations.
//!
//! # Features
//!
//! - **Indexed binary heap**: a heap-position array and its inverse kept in
//!   lockstep, so any element can be located by handle in O(1) and re-keyed
//!   or removed in O(log n)
//! - **Generic keys**: any `Ord` key type; handles are plain `usize`
//! - **Sorted snapshot iteration**: non-destructive, restartable iteration
//!   over the handles in ascending key order
//! - **k-way merge**: a lazy iterator merging `k` sorted sequences through
//!   one queue of capacity `k`
//!
//! # Example
//!
//! ```rust
//! use indexed_minheap::IndexedBinaryHeap;
//!
//! let mut pq = IndexedBinaryHeap::new(8);
//! pq.insert(0, 42).unwrap();
//! pq.insert(3, 7).unwrap();
//! pq.insert(5, 19).unwrap();
//!
//! pq.change_key(0, 1).unwrap();
//! assert_eq!(pq.min_handle().unwrap(), 0);
//!
//! let sorted: Vec<usize> = pq.iter().collect();
//! assert_eq!(sorted, vec![0, 3, 5]);
//! ```

pub mod error;
pub mod indexed_binary;
pub mod merge;

// Re-export the core types for convenience
pub use error::HeapError;
pub use indexed_binary::IndexedBinaryHeap;
