//! Unbounded double-ended priority queue.

use compare::{natural, Compare, Natural};

use crate::minmax;

/// A double-ended priority queue with no capacity limit.
///
/// Both the minimum and the maximum are readable in O(1) and removable in
/// O(log n); insertion is O(log n) with amortized-O(1) storage growth. One
/// flat `Vec` in min-max heap order backs everything (see [`minmax`]); there
/// are no nodes and no per-element allocation.
///
/// It is a logic error to mutate an element (through interior mutability)
/// so that its order relative to other elements changes while it is in the
/// queue.
///
/// # Example
///
/// ```
/// use duplex_heap::PriorityDeque;
///
/// let mut deque = PriorityDeque::new();
/// for x in [10, 5, 20, 15] {
///     deque.push(x);
/// }
///
/// assert_eq!(deque.len(), 4);
/// assert_eq!(deque.peek_min(), Some(&5));
/// assert_eq!(deque.peek_max(), Some(&20));
///
/// deque.push(3);
/// assert_eq!(deque.peek_min(), Some(&3));
///
/// assert_eq!(deque.pop_max(), Some(20));
/// assert_eq!(deque.pop_min(), Some(3));
/// assert_eq!(deque.len(), 3);
/// ```
#[derive(Clone)]
pub struct PriorityDeque<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> PriorityDeque<T> {
    /// Creates an empty deque ordered naturally.
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty deque with storage for `capacity` elements
    /// pre-allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T, C: Compare<T>> PriorityDeque<T, C> {
    /// Creates an empty deque with the given comparator.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty deque with pre-allocated storage and the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Creates a deque from an existing vector in O(n), bottom-up.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> Self {
        minmax::build(&mut vec, &cmp);
        debug_assert!(minmax::is_valid(&vec, &cmp));
        Self { data: vec, cmp }
    }

    /// Number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the backing storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves storage for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Adds an element. O(log n), plus amortized-O(1) growth.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        minmax::push(&mut self.data, &self.cmp);
    }

    /// The smallest element, or `None` if the deque is empty. O(1).
    #[inline]
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// The largest element, or `None` if the deque is empty.
    ///
    /// O(1): only the (at most two) max-level roots are candidates, see
    /// [`minmax::max_index`].
    #[inline]
    pub fn peek_max(&self) -> Option<&T> {
        minmax::max_index(&self.data, &self.cmp).map(|i| &self.data[i])
    }

    /// Removes and returns the smallest element. `None` if empty. O(log n).
    pub fn pop_min(&mut self) -> Option<T> {
        minmax::pop_min(&mut self.data, &self.cmp);
        self.data.pop()
    }

    /// Removes and returns the largest element. `None` if empty. O(log n).
    pub fn pop_max(&mut self) -> Option<T> {
        minmax::pop_max(&mut self.data, &self.cmp);
        self.data.pop()
    }

    /// Drops all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The elements in heap order (arbitrary as far as callers are
    /// concerned).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in arbitrary order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the deque, returning the backing vector in arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the deque, returning the elements in ascending order (under
    /// the comparator).
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        for end in (2..=self.data.len()).rev() {
            minmax::pop_min(&mut self.data[..end], &self.cmp);
        }
        // Minima were parked from the back forward.
        self.data.reverse();
        self.data
    }
}

impl<T: Ord> Default for PriorityDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for PriorityDeque<T> {
    /// Heapifies the vector in place, O(n).
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T: Ord> FromIterator<T> for PriorityDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityDeque<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.data.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a PriorityDeque<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
