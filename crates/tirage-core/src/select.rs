//! Random field selection from string pools.
//!
//! Two draw modes: a single uniform pick, and a multi-pick that samples
//! without replacement when the pool is large enough and falls back to
//! independent draws with replacement otherwise.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;

/// Pick one element uniformly at random, or `""` when the pool is empty.
pub fn pick_one<'a>(pool: &'a [String], rng: &mut StdRng) -> &'a str {
    if pool.is_empty() {
        ""
    } else {
        &pool[rng.random_range(0..pool.len())]
    }
}

/// Pick `count` elements at random.
///
/// When `count < pool.len()` the elements are distinct (sampling without
/// replacement). When `count >= pool.len()` each element is an independent
/// uniform draw, so duplicates are expected. An empty pool or a zero count
/// yields an empty vector. The pool itself is never mutated.
pub fn pick_many(pool: &[String], count: usize, rng: &mut StdRng) -> Vec<String> {
    if pool.is_empty() || count == 0 {
        return Vec::new();
    }
    if count >= pool.len() {
        (0..count)
            .map(|_| pool[rng.random_range(0..pool.len())].clone())
            .collect()
    } else {
        index::sample(rng, pool.len(), count)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect()
    }
}
