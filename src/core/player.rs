//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Seat index into the roster. The roster order is the turn order.
//!
//! ## Player
//!
//! A named participant with a score. Scores are `u32`, so the floor
//! invariant (never below zero) is carried by the type.

use serde::{Deserialize, Serialize};

/// Player identifier: 0-based seat in turn order.
///
/// Seats are 0-based internally but displayed 1-based, matching the
/// placeholder names handed out for blank inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around a table of `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0);
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Placeholder name used when the seat's name input was left blank.
    ///
    /// ```
    /// use parity_dice::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(2).placeholder_name(), "Player 3");
    /// ```
    #[must_use]
    pub fn placeholder_name(self) -> String {
        self.to_string()
    }

    /// Iterate over all seats for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Never empty.
    pub name: String,

    /// Current score.
    pub score: u32,
}

impl Player {
    /// Create a player with a zero score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// Add one point.
    pub fn gain_point(&mut self) {
        self.score += 1;
    }

    /// Remove one point unless already at zero.
    ///
    /// Returns `false` when the floor clamp kept the score at zero.
    pub fn lose_point(&mut self) -> bool {
        match self.score.checked_sub(1) {
            Some(score) => {
                self.score = score;
                true
            }
            None => false,
        }
    }
}
