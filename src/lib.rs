//! Classic Collections and Algorithms for Rust
//!
//! This crate provides from-scratch implementations of fundamental data
//! structures with explicit ownership and no allocations beyond what each
//! structure's contract implies, plus the classic sorting and searching
//! algorithms built on top of them.
//!
//! # Structures
//!
//! - **[`Array`]**: growable array with doubling growth and exact `reserve`
//! - **[`ArrayView`]/[`ArrayViewMut`]**: non-owning windows over an array's
//!   sub-range; offsets compose, mutable views split disjointly for
//!   divide-and-conquer algorithms
//! - **[`MaxHeap`]**: binary max-heap over an `Array`; O(log n) push/pop-max,
//!   O(n) bulk build, keyed variant via [`KeyValue`]
//! - **[`BoundedMaxHeap`]**: capacity-bounded heap retaining the N smallest
//!   elements seen (top-K by eviction of the maximum)
//! - **[`DoublyLinkedList`]**: O(1) push/pop at both ends and O(1) splicing
//!   of whole lists
//! - **[`SearchTree`]**: binary search tree with taller-subtree deletion
//! - **[`Stack`]/[`Queue`]/[`Deque`]**: access-discipline adapters
//!
//! Algorithms live in [`sort`] (selection, insertion, bubble, merge, quick
//! with injected pivot strategy, heap) and [`search`] (linear, binary).
//!
//! # Error policy
//!
//! Uniform across the crate: absence and empty-container reads are `Option`
//! (`pop_*`, `peek`, `front`, `back`, `min`, `max`, `find`); out-of-bounds
//! indexing and malformed view ranges panic, like slice indexing; a bounded
//! heap rejecting a push at capacity reports `false`, which is an outcome,
//! not an error. Nothing here returns a recoverable error type.
//!
//! # Concurrency
//!
//! None. Every structure is single-threaded and synchronous; `Send`/`Sync`
//! follow the element type, but no internal synchronization exists.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::{Array, BoundedMaxHeap, Heap};
//!
//! // Keep the 3 smallest of a stream.
//! let mut top = BoundedMaxHeap::new(3);
//! for v in [9, 4, 7, 1, 8, 2] {
//!     top.push(v);
//! }
//! assert_eq!(top.max(), Some(&4));
//!
//! // Sort in place.
//! let mut arr: Array<i32> = [5, 3, 1, 4, 2].iter().copied().collect();
//! rust_classic_collections::sort::quick_sort(&mut arr);
//! assert_eq!(arr.as_slice(), &[1, 2, 3, 4, 5]);
//! ```

pub mod adapters;
pub mod array;
pub mod bounded;
pub mod dlist;
pub mod entry;
pub mod heap;
pub mod search;
pub mod search_tree;
pub mod sort;
pub mod traits;
pub mod view;

pub use adapters::{Deque, Queue, Stack};
pub use array::Array;
pub use bounded::BoundedMaxHeap;
pub use dlist::DoublyLinkedList;
pub use entry::KeyValue;
pub use heap::MaxHeap;
pub use search_tree::SearchTree;
pub use traits::Heap;
pub use view::{ArrayView, ArrayViewMut};
