//! Outfit pool collection and sampling.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use roster_model::RosterRow;

/// Collects the row's non-empty outfit values in outfit-column order.
pub fn collect_outfit_pool(row: &RosterRow<'_>, outfit_columns: &[String]) -> Vec<String> {
    outfit_columns
        .iter()
        .filter_map(|column| row.value(column))
        .map(str::to_string)
        .collect()
}

/// Samples `quantity` outfits from `pool`.
///
/// With an empty pool the result is empty regardless of `quantity`. When
/// `quantity <= pool.len()` the result is that many distinct elements in
/// randomized order. When `quantity` exceeds the pool, every pool element
/// appears exactly once (shuffled) before any with-replacement repeats top
/// the sequence up to the exact requested length.
pub fn sample_outfits(rng: &mut StdRng, pool: &[String], quantity: usize) -> Vec<String> {
    if pool.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.shuffle(rng);
    order.truncate(quantity.min(pool.len()));
    let mut picked: Vec<String> = order.into_iter().map(|index| pool[index].clone()).collect();

    while picked.len() < quantity {
        let index = rng.gen_range(0..pool.len());
        picked.push(pool[index].clone());
    }

    picked
}
