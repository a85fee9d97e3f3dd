//! Roll outcomes and the per-roll history record.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// What a single roll did to the acting player's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollOutcome {
    /// Even roll: one point gained.
    Gained,
    /// Odd roll: one point lost.
    Lost,
    /// Odd roll at zero: floor clamp, no change.
    StayedAtZero,
}

impl RollOutcome {
    /// Signed change applied to the score.
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            RollOutcome::Gained => 1,
            RollOutcome::Lost => -1,
            RollOutcome::StayedAtZero => 0,
        }
    }
}

/// Roll parity. Negative values follow the usual integer parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity of an arbitrary integer roll.
    #[must_use]
    pub const fn of(roll: i64) -> Self {
        if roll.rem_euclid(2) == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parity::Even => f.write_str("EVEN"),
            Parity::Odd => f.write_str("ODD"),
        }
    }
}

/// One submitted roll, kept in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Who rolled.
    pub player: PlayerId,
    /// The submitted value.
    pub roll: i64,
    /// Effect on the score.
    pub outcome: RollOutcome,
    /// Score right after this roll.
    pub score_after: u32,
    /// Turn number the roll was made on (starts at 1).
    pub turn: u32,
}
