//! Fixed-capacity top-K priority queue.

use std::mem;

use compare::{natural, Compare, Natural};

use crate::minmax;

/// A priority queue that never holds more than `capacity` elements.
///
/// Out of everything pushed so far, the queue retains the `capacity`
/// highest-priority elements (the smallest, under the default natural
/// order). While below capacity a push simply inserts. At capacity, a push
/// either displaces the current lowest-priority element (when the new
/// element beats it) or bounces off, leaving the queue unchanged. Arrival
/// order never matters for the final contents.
///
/// Backing storage is one `Vec` sized once at construction; pushes past that
/// point never allocate. Both extremes are readable in O(1) and removable in
/// O(log n) thanks to the min-max heap layout (see [`minmax`]).
///
/// # Example
///
/// ```
/// use duplex_heap::BoundedPriorityQueue;
///
/// let mut queue = BoundedPriorityQueue::new(3);
/// for x in [1, 3, 2, 4, 0] {
///     queue.push(x);
/// }
///
/// // Only the three smallest survive.
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.peek_min(), Some(&0));
/// assert_eq!(queue.peek_max(), Some(&2));
///
/// // 5 is worse than everything retained: rejected.
/// assert_eq!(queue.push(5), Some(5));
/// assert_eq!(queue.peek_max(), Some(&2));
/// ```
///
/// # Custom orders
///
/// Any [`Compare`] policy works; "highest priority" means "smallest under
/// the comparator". Reversing the comparator turns this into a largest-K
/// queue.
///
/// ```
/// use std::cmp::Ordering;
/// use compare::Compare;
/// use duplex_heap::BoundedPriorityQueue;
///
/// struct Descending;
/// impl Compare<u32> for Descending {
///     fn compare(&self, a: &u32, b: &u32) -> Ordering {
///         b.cmp(a)
///     }
/// }
///
/// let mut top2 = BoundedPriorityQueue::with_comparator(2, Descending);
/// for x in [4u32, 1, 9, 7] {
///     top2.push(x);
/// }
/// assert_eq!(top2.peek_min(), Some(&9));
/// assert_eq!(top2.peek_max(), Some(&7));
/// ```
#[derive(Clone)]
pub struct BoundedPriorityQueue<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cap: usize,
    cmp: C,
}

impl<T: Ord> BoundedPriorityQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements, ordered
    /// naturally.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. A zero-capacity queue has no
    /// lowest-priority element to compare a push against, so it is rejected
    /// up front instead of silently swallowing every element.
    pub fn new(capacity: usize) -> Self {
        Self::with_comparator(capacity, natural())
    }

    /// Creates a queue from the elements of `vec`, with the given capacity.
    ///
    /// Elements are inserted in order; if `vec` is longer than `capacity`,
    /// the lowest-priority elements are dropped along the way, exactly as
    /// repeated [`push`](Self::push) would drop them.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn from_vec(capacity: usize, vec: Vec<T>) -> Self {
        Self::from_vec_and_comparator(capacity, vec, natural())
    }
}

impl<T, C: Compare<T>> BoundedPriorityQueue<T, C> {
    /// Creates an empty queue with the given capacity and comparator.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_comparator(capacity: usize, cmp: C) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");
        Self {
            data: Vec::with_capacity(capacity),
            cap: capacity,
            cmp,
        }
    }

    /// Creates a queue from the elements of `vec`, with the given capacity
    /// and comparator. See [`from_vec`](Self::from_vec).
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn from_vec_and_comparator(capacity: usize, vec: Vec<T>, cmp: C) -> Self {
        let mut queue = Self::with_comparator(capacity, cmp);
        for item in vec {
            queue.push(item);
        }
        debug_assert!(minmax::is_valid(&queue.data, &queue.cmp));
        queue
    }

    /// Number of elements currently in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of elements the queue retains. Fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Offers an element to the queue.
    ///
    /// Below capacity this inserts and returns `None`. At capacity, the
    /// element is weighed against the current lowest-priority element:
    /// strictly higher priority evicts it (returned as `Some(evicted)`),
    /// anything else bounces (`Some(item)` gives the element back). The
    /// returned value is always the one element *not* in the queue
    /// afterwards. O(log n) either way.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.data.len() < self.cap {
            self.data.push(item);
            minmax::push(&mut self.data, &self.cmp);
            return None;
        }

        // Full queue is never empty (capacity > 0), so the max exists.
        let max = minmax::max_index(&self.data, &self.cmp).expect("full queue has a max");
        if !self.cmp.compares_lt(&item, &self.data[max]) {
            return Some(item);
        }

        // Evict: move the max into last position, overwrite it in place,
        // then sift the replacement back in. No length change.
        minmax::pop_max(&mut self.data, &self.cmp);
        let last = self.data.len() - 1;
        let evicted = mem::replace(&mut self.data[last], item);
        minmax::push(&mut self.data, &self.cmp);
        Some(evicted)
    }

    /// The highest-priority element, or `None` if the queue is empty. O(1).
    #[inline]
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// The lowest-priority element retained, or `None` if empty.
    ///
    /// O(1): only the (at most two) max-level roots are candidates, see
    /// [`minmax::max_index`].
    #[inline]
    pub fn peek_max(&self) -> Option<&T> {
        minmax::max_index(&self.data, &self.cmp).map(|i| &self.data[i])
    }

    /// Removes and returns the highest-priority element. `None` if empty.
    /// O(log n).
    pub fn pop_min(&mut self) -> Option<T> {
        minmax::pop_min(&mut self.data, &self.cmp);
        self.data.pop()
    }

    /// Removes and returns the lowest-priority element. `None` if empty.
    /// O(log n).
    pub fn pop_max(&mut self) -> Option<T> {
        minmax::pop_max(&mut self.data, &self.cmp);
        self.data.pop()
    }

    /// Drops all elements. Capacity is unaffected.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The retained elements in heap order (arbitrary as far as callers are
    /// concerned).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the retained elements in arbitrary order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the queue, returning the backing vector in arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the queue, returning the retained elements sorted from
    /// highest to lowest priority (ascending, under the default order).
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        for end in (2..=self.data.len()).rev() {
            minmax::pop_min(&mut self.data[..end], &self.cmp);
        }
        // Minima were parked from the back forward.
        self.data.reverse();
        self.data
    }
}

impl<T, C: Compare<T>> Extend<T> for BoundedPriorityQueue<T, C> {
    /// Offers every element of `iter` via [`push`](Self::push).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a BoundedPriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
