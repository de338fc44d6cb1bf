//! Free functions maintaining the min-max heap invariant over a slice.
//!
//! A min-max heap stores an implicit complete binary tree in a flat array:
//! the root lives at index 0 and the children of index `i` live at `2i + 1`
//! and `2i + 2`. Levels alternate roles. Even levels (root, grandchildren of
//! the root, ...) are *min levels*: an element there is less than or equal to
//! everything in its subtree. Odd levels are *max levels*: an element there
//! is greater than or equal to everything in its subtree.
//!
//! Two consequences drive the whole API:
//!
//! - the minimum is always at index 0;
//! - the maximum is at index 1 or 2 (or index 0 when the heap holds a single
//!   element), because those are the max-level roots covering the rest of
//!   the tree.
//!
//! Both extremes are therefore reachable in O(1) and removable in O(log n)
//! from the same array, which is what [`PriorityDeque`] and
//! [`BoundedPriorityQueue`] build on.
//!
//! All navigation is index arithmetic on the slice. There are no node
//! objects and no allocation; the functions here only ever swap elements in
//! place.
//!
//! The sift procedures follow Atkinson, Sack, Santoro and Strothotte,
//! "Min-Max Heaps and Generalized Priority Queues", CACM 1986.
//!
//! Ordering is supplied as a [`Compare`] policy rather than an `Ord` bound,
//! so the same slice can be heapified under any strict weak order (reversed,
//! keyed, indirect through a handle, ...).
//!
//! [`PriorityDeque`]: crate::PriorityDeque
//! [`BoundedPriorityQueue`]: crate::BoundedPriorityQueue

use compare::Compare;

/// Depth of index `i` in the implicit tree; parity decides min/max role.
#[inline]
fn level(i: usize) -> u32 {
    (i + 1).ilog2()
}

#[inline]
fn on_min_level(i: usize) -> bool {
    level(i) % 2 == 0
}

#[inline]
fn parent(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some((i - 1) / 2)
    }
}

#[inline]
fn grandparent(i: usize) -> Option<usize> {
    if i < 3 {
        None
    } else {
        Some((i - 3) / 4)
    }
}

/// Index of the smallest among the children and grandchildren of `i`.
///
/// Returns `None` if `i` has no children. At most six candidates exist:
/// `2i+1`, `2i+2` and `4i+3 .. 4i+6`.
fn min_descendant<T, C: Compare<T>>(v: &[T], i: usize, cmp: &C) -> Option<usize> {
    let left = 2 * i + 1;
    if left >= v.len() {
        return None;
    }
    let mut best = left;
    let right = left + 1;
    if right < v.len() && cmp.compares_lt(&v[right], &v[best]) {
        best = right;
    }
    let grand = 4 * i + 3;
    for j in grand..(grand + 4).min(v.len()) {
        if cmp.compares_lt(&v[j], &v[best]) {
            best = j;
        }
    }
    Some(best)
}

/// Index of the largest among the children and grandchildren of `i`.
fn max_descendant<T, C: Compare<T>>(v: &[T], i: usize, cmp: &C) -> Option<usize> {
    let left = 2 * i + 1;
    if left >= v.len() {
        return None;
    }
    let mut best = left;
    let right = left + 1;
    if right < v.len() && cmp.compares_gt(&v[right], &v[best]) {
        best = right;
    }
    let grand = 4 * i + 3;
    for j in grand..(grand + 4).min(v.len()) {
        if cmp.compares_gt(&v[j], &v[best]) {
            best = j;
        }
    }
    Some(best)
}

/// Restores the invariant below a min-level index whose element may be too
/// large, assuming everything else already satisfies it.
fn sift_down_min<T, C: Compare<T>>(v: &mut [T], mut i: usize, cmp: &C) {
    while let Some(m) = min_descendant(v, i, cmp) {
        if m >= 4 * i + 3 {
            // m is a grandchild, two min levels down.
            if !cmp.compares_lt(&v[m], &v[i]) {
                break;
            }
            v.swap(m, i);
            // The displaced element may now violate the max level between
            // i and m; m >= 3, so the parent index is always in range.
            let p = (m - 1) / 2;
            if cmp.compares_gt(&v[m], &v[p]) {
                v.swap(m, p);
            }
            i = m;
        } else {
            // m is a direct child on a max level: it already dominates its
            // own subtree, so one swap finishes the job.
            if cmp.compares_lt(&v[m], &v[i]) {
                v.swap(m, i);
            }
            break;
        }
    }
}

/// Mirror of [`sift_down_min`] for max-level indices.
fn sift_down_max<T, C: Compare<T>>(v: &mut [T], mut i: usize, cmp: &C) {
    while let Some(m) = max_descendant(v, i, cmp) {
        if m >= 4 * i + 3 {
            if !cmp.compares_gt(&v[m], &v[i]) {
                break;
            }
            v.swap(m, i);
            let p = (m - 1) / 2;
            if cmp.compares_lt(&v[m], &v[p]) {
                v.swap(m, p);
            }
            i = m;
        } else {
            if cmp.compares_gt(&v[m], &v[i]) {
                v.swap(m, i);
            }
            break;
        }
    }
}

/// Dispatches on level parity. Tolerates `i == v.len()` (an element swapped
/// out of a two- or three-element heap leaves nothing to sift): no index is
/// dereferenced before the child bound check.
fn sift_down<T, C: Compare<T>>(v: &mut [T], i: usize, cmp: &C) {
    if on_min_level(i) {
        sift_down_min(v, i, cmp);
    } else {
        sift_down_max(v, i, cmp);
    }
}

/// Moves `v[i]` toward the root along same-parity levels while it beats its
/// grandparent. The parent relation was already settled by [`sift_up`].
fn sift_up_min<T, C: Compare<T>>(v: &mut [T], mut i: usize, cmp: &C) {
    while let Some(g) = grandparent(i) {
        if !cmp.compares_lt(&v[i], &v[g]) {
            break;
        }
        v.swap(i, g);
        i = g;
    }
}

fn sift_up_max<T, C: Compare<T>>(v: &mut [T], mut i: usize, cmp: &C) {
    while let Some(g) = grandparent(i) {
        if !cmp.compares_gt(&v[i], &v[g]) {
            break;
        }
        v.swap(i, g);
        i = g;
    }
}

/// Restores the invariant upward from a freshly placed leaf.
///
/// One comparison against the parent decides which role the element takes:
/// an element on a min level that is larger than its (max-level) parent
/// trades places and continues as a max-level fixup, and vice versa. After
/// that, only grandparents need to be examined.
fn sift_up<T, C: Compare<T>>(v: &mut [T], i: usize, cmp: &C) {
    let p = match parent(i) {
        Some(p) => p,
        None => return,
    };
    if on_min_level(i) {
        if cmp.compares_gt(&v[i], &v[p]) {
            v.swap(i, p);
            sift_up_max(v, p, cmp);
        } else {
            sift_up_min(v, i, cmp);
        }
    } else if cmp.compares_lt(&v[i], &v[p]) {
        v.swap(i, p);
        sift_up_min(v, p, cmp);
    } else {
        sift_up_max(v, i, cmp);
    }
}

/// Rearranges `v` into min-max heap order.
///
/// Sifts down every internal node, bottom-up. O(n). Slices of length 0 or 1
/// are already heaps and are left untouched.
pub fn build<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i, cmp);
    }
}

/// Restores the invariant after one new element was appended at `v[len-1]`.
///
/// `v[..len-1]` must already be a valid min-max heap under `cmp`. O(log n).
/// An empty slice is a no-op.
pub fn push<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    if let Some(last) = v.len().checked_sub(1) {
        sift_up(v, last, cmp);
    }
}

/// Moves the minimum to `v[len-1]` and re-establishes the invariant over
/// `v[..len-1]`.
///
/// The caller truncates the slice (or pops the backing vector) afterwards.
/// O(log n). Slices shorter than 2 are left untouched: the minimum of a
/// one-element heap is already in last position.
pub fn pop_min<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    if v.len() < 2 {
        return;
    }
    let last = v.len() - 1;
    v.swap(0, last);
    sift_down(&mut v[..last], 0, cmp);
}

/// Moves the maximum to `v[len-1]` and re-establishes the invariant over
/// `v[..len-1]`.
///
/// Same contract as [`pop_min`]. O(log n).
pub fn pop_max<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    if v.len() < 2 {
        return;
    }
    let last = v.len() - 1;
    let max = if last == 1 || cmp.compares_gt(&v[1], &v[2]) {
        1
    } else {
        2
    };
    v.swap(max, last);
    sift_down(&mut v[..last], max, cmp);
}

/// Index of the maximum element of a valid min-max heap, or `None` if empty.
///
/// For three or more elements only indices 1 and 2 are examined. They are
/// the max-level roots of the two subtrees hanging off the min root, so each
/// dominates everything below it and the overall maximum must be one of the
/// two. A wider scan is never needed, at any heap size.
pub fn max_index<T, C: Compare<T>>(v: &[T], cmp: &C) -> Option<usize> {
    match v.len() {
        0 => None,
        1 => Some(0),
        2 => Some(1),
        _ => Some(if cmp.compares_gt(&v[1], &v[2]) { 1 } else { 2 }),
    }
}

/// Returns `true` if `v` satisfies the min-max heap property under `cmp`.
///
/// Walks the full subtree of every element, so this is quadratic in the
/// worst case. Meant for tests and debug assertions, not production paths.
pub fn is_valid<T, C: Compare<T>>(v: &[T], cmp: &C) -> bool {
    for i in 0..v.len() {
        let min_level = on_min_level(i);
        let mut pending = vec![2 * i + 1, 2 * i + 2];
        while let Some(j) = pending.pop() {
            if j >= v.len() {
                continue;
            }
            let ok = if min_level {
                !cmp.compares_lt(&v[j], &v[i])
            } else {
                !cmp.compares_gt(&v[j], &v[i])
            };
            if !ok {
                return false;
            }
            pending.push(2 * j + 1);
            pending.push(2 * j + 2);
        }
    }
    true
}
