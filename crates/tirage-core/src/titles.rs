//! Weighted title assignment across the deck.
//!
//! When the distribution's total weight covers the requested card count,
//! titles are dealt from the exact weighted multiset (shuffle then cut), so
//! no title can appear more often than its configured weight. When the deck
//! is larger than the total weight, each card draws its title independently
//! with probability proportional to the weights.

use std::collections::BTreeMap;

use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{DeckError, DeckResult};

/// Build the ordered title assignment for a deck of `card_count` cards.
///
/// The returned vector has length exactly `card_count`; element `i` becomes
/// the title of card `i + 1`. Fails with [`DeckError::NoPositiveWeight`]
/// when no title has a positive weight (validation normally rejects such a
/// configuration before this point).
pub fn build_title_pool(
    distribution: &BTreeMap<String, u32>,
    card_count: usize,
    rng: &mut StdRng,
) -> DeckResult<Vec<String>> {
    let total: u64 = distribution.values().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return Err(DeckError::NoPositiveWeight);
    }

    if total >= card_count as u64 {
        // Deal from the exact multiset: leftover weight capacity is cut
        // away, never redistributed.
        let mut pool: Vec<String> = distribution
            .iter()
            .flat_map(|(title, &weight)| std::iter::repeat_n(title.clone(), weight as usize))
            .collect();
        pool.shuffle(rng);
        pool.truncate(card_count);
        Ok(pool)
    } else {
        let titles: Vec<&String> = distribution.keys().collect();
        let weights: Vec<u32> = distribution.values().copied().collect();
        let index = WeightedIndex::new(&weights).map_err(|_| DeckError::NoPositiveWeight)?;
        Ok((0..card_count)
            .map(|_| titles[index.sample(rng)].clone())
            .collect())
    }
}
