//! Game configuration types.
//!
//! Hosts configure a game at startup by providing:
//! - `GameConfig`: winning threshold, point label, turn-order policy, die size
//! - `RevealConfig`: timing of the cosmetic turn-order reveal
//!
//! Scoring itself is fixed (even gains, odd loses) and is not configurable.
//!
//! Builders assert their invariants. Configs loaded through serde are checked
//! by `validate` instead and fail with `GameError::InvalidConfig`.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with.
pub const MAX_PLAYERS: usize = 10;

/// Timing of the turn-order reveal animation.
///
/// A repeating timer fires every `interval_ms` for `steps` ticks, then stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RevealFields")]
pub struct RevealConfig {
    /// Milliseconds between ticks.
    pub interval_ms: u64,

    /// Number of ticks, the last of which shows the final order.
    pub steps: u32,
}

impl RevealConfig {
    /// Create a reveal configuration.
    pub fn new(interval_ms: u64, steps: u32) -> Self {
        assert!(steps > 0, "A reveal needs at least one step");
        Self { interval_ms, steps }
    }

    /// Interval between ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Total time from first to last tick, saturating at `Duration::MAX`.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.interval().checked_mul(self.steps).unwrap_or(Duration::MAX)
    }

    /// Check invariants that the builder would have asserted.
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(GameError::InvalidConfig { reason: "reveal steps must be positive" });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RevealFields {
    interval_ms: u64,
    steps: u32,
}

impl TryFrom<RevealFields> for RevealConfig {
    type Error = GameError;

    fn try_from(fields: RevealFields) -> Result<Self> {
        let config = Self {
            interval_ms: fields.interval_ms,
            steps: fields.steps,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            steps: 12,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameConfigFields")]
pub struct GameConfig {
    /// Score a player must reach (or pass) to win.
    pub winning_score: u32,

    /// Unit name used in status messages ("Chip", "Point").
    pub point_label: String,

    /// Randomize turn order before play begins.
    pub shuffle_turn_order: bool,

    /// Faces on the die used by `Session::roll_die`.
    pub die_faces: u32,

    /// Cosmetic reveal timing, used only when shuffling.
    pub reveal: RevealConfig,
}

impl GameConfig {
    /// Create a configuration with the given winning threshold.
    pub fn new(winning_score: u32) -> Self {
        assert!(winning_score > 0, "Winning score must be positive");

        Self {
            winning_score,
            point_label: "Chip".to_string(),
            shuffle_turn_order: false,
            die_faces: 6,
            reveal: RevealConfig::default(),
        }
    }

    /// First to 10 chips, fixed turn order.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(10)
    }

    /// First to 4 points.
    #[must_use]
    pub fn quick() -> Self {
        Self::new(4).with_point_label("Point")
    }

    /// Set the unit name used in messages.
    #[must_use]
    pub fn with_point_label(mut self, label: impl Into<String>) -> Self {
        self.point_label = label.into();
        self
    }

    /// Randomize turn order before play.
    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.shuffle_turn_order = true;
        self
    }

    /// Set the die size for host-driven rolls.
    #[must_use]
    pub fn with_die_faces(mut self, faces: u32) -> Self {
        assert!(faces > 0, "A die needs at least one face");
        self.die_faces = faces;
        self
    }

    /// Set the reveal timing.
    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }

    /// Accepted player counts.
    #[must_use]
    pub fn player_range(&self) -> RangeInclusive<usize> {
        MIN_PLAYERS..=MAX_PLAYERS
    }

    /// Check invariants that the builders would have asserted.
    ///
    /// Fields are public, so a config edited in place or loaded from a file
    /// is only trusted after this passes.
    pub fn validate(&self) -> Result<()> {
        if self.winning_score == 0 {
            return Err(GameError::InvalidConfig { reason: "winning_score must be positive" });
        }
        if self.die_faces == 0 {
            return Err(GameError::InvalidConfig { reason: "die_faces must be positive" });
        }
        self.reveal.validate()
    }
}

#[derive(Deserialize)]
struct GameConfigFields {
    winning_score: u32,
    point_label: String,
    shuffle_turn_order: bool,
    die_faces: u32,
    reveal: RevealConfig,
}

impl TryFrom<GameConfigFields> for GameConfig {
    type Error = GameError;

    fn try_from(fields: GameConfigFields) -> Result<Self> {
        let config = Self {
            winning_score: fields.winning_score,
            point_label: fields.point_label,
            shuffle_turn_order: fields.shuffle_turn_order,
            die_faces: fields.die_faces,
            reveal: fields.reveal,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
