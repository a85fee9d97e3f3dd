//! Cosmetic turn-order reveal.
//!
//! The real turn order is already fixed when a reveal starts. The reveal is a
//! finite, cancellable run of ticks a host can animate on its own timer: every
//! tick but the last shows a scrambled order, and the last shows the real one.
//! Nothing here touches `GameState`.

use std::time::Duration;

use smallvec::SmallVec;

use crate::core::{GameRng, PlayerId, RevealConfig, MAX_PLAYERS};
use crate::shuffle::ShuffleAssigner;

/// Seat ordering shown for one frame.
pub type RevealOrder = SmallVec<[PlayerId; MAX_PLAYERS]>;

/// A single frame of the reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealTick {
    /// 1-based step number.
    pub step: u32,
    /// Total steps in the sequence.
    pub steps: u32,
    /// How long the host should wait before showing this frame.
    pub delay: Duration,
    /// Seats in display order for this frame.
    pub order: RevealOrder,
}

impl RevealTick {
    /// The last frame, which shows the real turn order.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.step == self.steps
    }
}

/// Finite sequence of reveal frames.
#[derive(Clone, Debug)]
pub struct RevealSequence {
    player_count: usize,
    rng: GameRng,
    config: RevealConfig,
    step: u32,
    cancelled: bool,
}

impl RevealSequence {
    /// Build a reveal for a roster that has already been put in turn order.
    ///
    /// `rng` should be a dedicated stream so frames never perturb game randomness.
    pub fn new(player_count: usize, rng: GameRng, config: RevealConfig) -> Self {
        Self {
            player_count,
            rng,
            config,
            step: 0,
            cancelled: false,
        }
    }

    /// Stop the sequence. No further ticks are produced.
    pub fn cancel(&mut self) {
        if !self.is_finished() {
            log::trace!("reveal cancelled at step {}/{}", self.step, self.config.steps);
        }
        self.cancelled = true;
    }

    /// True once every tick has been taken or the sequence was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.step >= self.config.steps
    }

    /// Ticks left to produce.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        if self.cancelled {
            0
        } else {
            self.config.steps - self.step
        }
    }

    fn final_order(&self) -> RevealOrder {
        PlayerId::all(self.player_count).collect()
    }
}

impl Iterator for RevealSequence {
    type Item = RevealTick;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        self.step += 1;
        let mut order = self.final_order();
        if self.step < self.config.steps {
            ShuffleAssigner::new(&mut self.rng).shuffle_in_place(&mut order);
        }

        log::trace!("reveal tick {}/{}: {:?}", self.step, self.config.steps, order);

        Some(RevealTick {
            step: self.step,
            steps: self.config.steps,
            delay: self.config.interval(),
            order,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RevealSequence {}
