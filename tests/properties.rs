//! Randomized property tests for the heap algorithm and both adapters.

use std::cmp::Ordering;

use compare::{natural, Compare};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use duplex_heap::{minmax, BoundedPriorityQueue, PriorityDeque};

// =============================================================================
// Core algorithm
// =============================================================================

#[test]
fn fuzz_build_always_valid() {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    for _ in 0..200 {
        let len = rng.gen_range(0..128);
        let mut v: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
        minmax::build(&mut v, &natural());
        assert!(minmax::is_valid(&v, &natural()));
    }
}

#[test]
fn fuzz_invariant_under_mixed_ops() {
    let mut rng = SmallRng::seed_from_u64(0xBEEF);
    let cmp = natural();
    let mut v: Vec<i64> = Vec::new();

    for _ in 0..2000 {
        match rng.gen_range(0..4) {
            0 | 1 => {
                v.push(rng.gen_range(-1000..1000));
                minmax::push(&mut v, &cmp);
            }
            2 => {
                minmax::pop_min(&mut v, &cmp);
                v.pop();
            }
            _ => {
                minmax::pop_max(&mut v, &cmp);
                v.pop();
            }
        }
        assert!(minmax::is_valid(&v, &cmp));

        if !v.is_empty() {
            let min = v.iter().min().unwrap();
            let max = v.iter().max().unwrap();
            assert_eq!(v[0], *min);
            let mi = minmax::max_index(&v, &cmp).unwrap();
            assert_eq!(v[mi], *max);
        }
    }
}

// =============================================================================
// Double-ended queue vs. a linear-scan model
// =============================================================================

#[test]
fn fuzz_deque_matches_model() {
    let mut rng = SmallRng::seed_from_u64(0xD00D);
    let mut deque: PriorityDeque<i32> = PriorityDeque::new();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..3000 {
        match rng.gen_range(0..4) {
            0 | 1 => {
                let x = rng.gen_range(-500..500);
                deque.push(x);
                model.push(x);
            }
            2 => {
                let got = deque.pop_min();
                let want = model.iter().copied().min();
                assert_eq!(got, want);
                if let Some(w) = want {
                    let pos = model.iter().position(|&x| x == w).unwrap();
                    model.swap_remove(pos);
                }
            }
            _ => {
                let got = deque.pop_max();
                let want = model.iter().copied().max();
                assert_eq!(got, want);
                if let Some(w) = want {
                    let pos = model.iter().position(|&x| x == w).unwrap();
                    model.swap_remove(pos);
                }
            }
        }
        assert_eq!(deque.len(), model.len());
        assert_eq!(deque.peek_min().copied(), model.iter().copied().min());
        assert_eq!(deque.peek_max().copied(), model.iter().copied().max());
    }
}

#[test]
fn fuzz_deque_drains_sorted() {
    let mut rng = SmallRng::seed_from_u64(0xCAFE);
    for _ in 0..50 {
        let len = rng.gen_range(0..200);
        let values: Vec<u32> = (0..len).map(|_| rng.gen()).collect();

        let mut expected = values.clone();
        expected.sort_unstable();

        let deque: PriorityDeque<u32> = values.into_iter().collect();
        assert_eq!(deque.into_sorted_vec(), expected);
    }
}

// =============================================================================
// Bounded queue vs. sorted truth
// =============================================================================

#[test]
fn fuzz_bounded_retains_k_smallest() {
    let mut rng = SmallRng::seed_from_u64(0xACE);
    for _ in 0..50 {
        let cap = rng.gen_range(1..40);
        let n = rng.gen_range(0..400);
        let stream: Vec<i32> = (0..n).map(|_| rng.gen_range(-1000..1000)).collect();

        let mut queue = BoundedPriorityQueue::new(cap);
        for &x in &stream {
            queue.push(x);
        }

        let mut truth = stream;
        truth.sort_unstable();
        truth.truncate(cap);

        assert_eq!(queue.len(), truth.len());
        assert_eq!(queue.into_sorted_vec(), truth);
    }
}

#[test]
fn fuzz_bounded_size_never_exceeds_capacity() {
    let mut rng = SmallRng::seed_from_u64(0xF00D);
    let mut queue = BoundedPriorityQueue::new(8);
    let mut pushed = 0usize;
    let mut popped = 0usize;

    for _ in 0..2000 {
        if rng.gen_bool(0.7) {
            queue.push(rng.gen_range(0..100));
            pushed += 1;
        } else if rng.gen_bool(0.5) {
            popped += usize::from(queue.pop_min().is_some());
        } else {
            popped += usize::from(queue.pop_max().is_some());
        }
        assert!(queue.len() <= 8);
        assert!(queue.len() <= pushed - popped);
    }
}

// =============================================================================
// Custom comparators
// =============================================================================

/// Orders handle indices by the value they refer to.
struct ByValue<'a>(&'a [u64]);

impl Compare<usize> for ByValue<'_> {
    fn compare(&self, a: &usize, b: &usize) -> Ordering {
        self.0[*a].cmp(&self.0[*b])
    }
}

#[test]
fn indirect_comparator_orders_by_pointee() {
    let mut rng = SmallRng::seed_from_u64(0xBEE);
    let values: Vec<u64> = (0..100).map(|_| rng.gen_range(0..10_000)).collect();

    let handles: Vec<usize> = (0..values.len()).collect();
    let deque = PriorityDeque::from_vec_and_comparator(handles, ByValue(&values));

    let min_handle = *deque.peek_min().unwrap();
    let max_handle = *deque.peek_max().unwrap();
    assert_eq!(values[min_handle], *values.iter().min().unwrap());
    assert_eq!(values[max_handle], *values.iter().max().unwrap());

    let drained: Vec<u64> = {
        let mut deque = deque;
        let mut out = Vec::new();
        while let Some(h) = deque.pop_min() {
            out.push(values[h]);
        }
        out
    };
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn reversed_comparator_bounded_keeps_largest() {
    struct Descending;
    impl Compare<i32> for Descending {
        fn compare(&self, a: &i32, b: &i32) -> Ordering {
            b.cmp(a)
        }
    }

    let mut rng = SmallRng::seed_from_u64(0x1DEA);
    let stream: Vec<i32> = (0..300).map(|_| rng.gen_range(-500..500)).collect();

    let mut queue = BoundedPriorityQueue::with_comparator(10, Descending);
    for &x in &stream {
        queue.push(x);
    }

    let mut truth = stream;
    truth.sort_unstable_by(|a, b| b.cmp(a));
    truth.truncate(10);

    assert_eq!(queue.into_sorted_vec(), truth);
}
