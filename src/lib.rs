//! Double-ended and bounded priority queues over one flat array.
//!
//! A classic binary heap gives O(1) access to one extreme. The structures
//! here give O(1) access to *both*, from a single contiguous buffer, by
//! keeping the array in min-max heap order: even tree levels obey min-heap
//! ordering, odd levels obey max-heap ordering. Parent/child/grandparent
//! navigation is pure index arithmetic, so there are no node objects, no
//! links, and no allocation beyond the backing `Vec`.
//!
//! # What's here
//!
//! - [`minmax`] — the algorithm itself, as free functions over `&mut [T]`
//!   plus a comparator: `build`, `push`, `pop_min`, `pop_max`. Use these
//!   directly when you already own a buffer.
//! - [`BoundedPriorityQueue`] — a top-K adapter. Capacity is fixed at
//!   construction; at capacity, a push evicts the current worst element or
//!   bounces, so the queue always holds the K best elements seen. Memory is
//!   one allocation, made once.
//! - [`PriorityDeque`] — an unbounded double-ended priority queue with
//!   symmetric `peek_min`/`peek_max`/`pop_min`/`pop_max`.
//!
//! # Example
//!
//! ```
//! use duplex_heap::{BoundedPriorityQueue, PriorityDeque};
//!
//! // Keep the 3 cheapest quotes out of a stream.
//! let mut best = BoundedPriorityQueue::new(3);
//! for price in [104, 99, 310, 98, 250, 101] {
//!     best.push(price);
//! }
//! assert_eq!(best.into_sorted_vec(), [98, 99, 101]);
//!
//! // Track both ends of a window.
//! let mut window = PriorityDeque::new();
//! window.extend([10, 5, 20, 15]);
//! assert_eq!(window.peek_min(), Some(&5));
//! assert_eq!(window.peek_max(), Some(&20));
//! ```
//!
//! # Ordering
//!
//! All types take a [`Compare`] policy (re-exported from the `compare`
//! crate) with the natural `Ord`-based order as the default. "Higher
//! priority" always means "smaller under the comparator"; supply a reversed
//! or keyed comparator to change what the queue optimizes for, including
//! ordering handles indirectly by what they point at.
//!
//! # Concurrency
//!
//! Single-threaded by design. Every operation is synchronous, runs to
//! completion, and needs `&mut self`; wrap a queue in a `Mutex` if it must
//! be shared.

#![warn(missing_docs)]

pub mod bounded;
pub mod deque;
pub mod minmax;

pub use bounded::BoundedPriorityQueue;
pub use deque::PriorityDeque;

pub use compare::{natural, Compare, Natural};
