//! Unbiased turn-order shuffling.
//!
//! Fisher-Yates, walking from the last position down to 1 and swapping
//! each position with a uniform pick from `[0, i]`. Drawing from `[0, n)`
//! at every step looks similar but is biased, so the range matters.

use crate::core::GameRng;

/// Applies a uniformly random permutation to a roster.
///
/// Every one of the `n!` orderings is equally likely. Only order changes;
/// the elements themselves are untouched.
pub struct ShuffleAssigner<'a> {
    rng: &'a mut GameRng,
}

impl<'a> ShuffleAssigner<'a> {
    /// Shuffle with the given RNG stream.
    pub fn new(rng: &'a mut GameRng) -> Self {
        Self { rng }
    }

    /// Permute a slice in place.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.gen_index_inclusive(i);
            log::trace!("shuffle: swap {i} <-> {j}");
            items.swap(i, j);
        }
    }

    /// Permute an owned roster and hand it back.
    #[must_use]
    pub fn shuffle<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        self.shuffle_in_place(&mut items);
        items
    }
}
