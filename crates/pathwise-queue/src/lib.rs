//! A binary min-heap priority queue.
//!
//! [`PriorityQueue`] keeps a multiset of elements ordered by their [`Ord`]
//! implementation and always yields the smallest first. Beyond the usual
//! push/pop/peek it offers predicate-based membership tests, removal, and
//! in-place priority updates, plus bulk construction from existing
//! collections. Those extras are what a best-first search frontier needs
//! when it does not maintain an auxiliary index into the heap.

mod heap;

pub use heap::PriorityQueue;
