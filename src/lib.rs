//! Comparator-Driven Binary Heap
//!
//! This crate provides an array-backed binary heap whose ordering is selected
//! at construction time: ascending priority ([`Mode::Min`]), descending
//! priority ([`Mode::Max`]), or a caller-supplied predicate.
//!
//! # Features
//!
//! - **Min and Max modes**: one structure, two built-in orderings
//! - **Custom comparators**: any `fn(&T, &T) -> bool` predicate meaning
//!   "the first argument outranks the second"
//! - **Array encoding**: the heap is a complete binary tree stored in a
//!   `Vec`, navigated with index arithmetic rather than pointer links
//! - **No failure paths**: empty-heap queries return `None`; nothing panics
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{Heap, Mode};
//!
//! let mut heap = Heap::with_mode(Mode::Min);
//! heap.push(5);
//! heap.push(1);
//! heap.push(3);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), None);
//! ```

pub mod heap;
pub mod index;
pub mod ordering;

// Re-export the main types for convenience
pub use heap::Heap;
pub use ordering::{Comparator, Mode};
