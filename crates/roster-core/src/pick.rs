//! Seeded uniform row selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Draws one row index uniformly from the retained candidates.
///
/// Returns `None` on an empty candidate set (a filter miss, not an error).
pub fn pick_row(rng: &mut StdRng, candidates: &[usize]) -> Option<usize> {
    candidates.choose(rng).copied()
}
