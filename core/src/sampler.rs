//! Weighted categorical sampling.
//!
//! Every categorical choice in the generator goes through `pick`:
//! pet traits, biome tiers, narrative templates, vocabulary tokens,
//! party roles. One draw per call, always, even for malformed pools,
//! so the draw count never depends on pool contents.
//!
//! RULE: Pool order is part of the contract. The first entry whose
//! cumulative weight boundary is crossed wins. Reordering a pool
//! changes what existing seeds produce.

use crate::rng::UnitSource;
use serde::{Deserialize, Serialize};

/// One `(key, weight)` pair in a sampling pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry<T> {
    pub key: T,
    pub weight: f64,
}

impl<T> WeightEntry<T> {
    pub const fn new(key: T, weight: f64) -> Self {
        Self { key, weight }
    }
}

/// Shorthand for building pool tables.
pub const fn w<T>(key: T, weight: f64) -> WeightEntry<T> {
    WeightEntry::new(key, weight)
}

/// Pick one key from `pool` proportionally to weight.
pub fn pick<'a, T, R: UnitSource + ?Sized>(pool: &'a [WeightEntry<T>], src: &mut R) -> &'a T {
    let idx = pick_index_by(pool, |e| e.weight, src.next_f64());
    &pool[idx].key
}

/// Pick uniformly: the same cumulative walk with unit weights.
pub fn pick_uniform<'a, T, R: UnitSource + ?Sized>(items: &'a [T], src: &mut R) -> &'a T {
    let idx = pick_index_by(items, |_| 1.0, src.next_f64());
    &items[idx]
}

/// Cumulative-subtraction walk over `items` for a single draw in [0, 1).
///
/// Returns the first index when total weight is not a positive finite
/// number. If rounding leaves the draw unspent past the end, returns
/// the last entry that carried positive weight.
pub fn pick_index_by<T>(items: &[T], weight_of: impl Fn(&T) -> f64, draw: f64) -> usize {
    assert!(!items.is_empty(), "cannot sample from an empty pool");

    let total: f64 = items.iter().map(&weight_of).sum();
    if !(total.is_finite() && total > 0.0) {
        log::warn!("malformed pool (total weight {total}), falling back to first entry");
        return 0;
    }

    let mut remaining = draw * total;
    let mut last_positive = 0;
    for (i, item) in items.iter().enumerate() {
        let weight = weight_of(item);
        if weight > 0.0 {
            last_positive = i;
        }
        remaining -= weight;
        if remaining < 0.0 {
            return i;
        }
    }
    last_positive
}

/// Sum of all weights in a pool.
pub fn total_weight<T>(pool: &[WeightEntry<T>]) -> f64 {
    pool.iter().map(|e| e.weight).sum()
}
