//! # parity-dice
//!
//! A turn-based multiplayer dice scoring game.
//!
//! Players take turns submitting a die roll. An even roll earns a point; an
//! odd roll costs one, never going below zero. The first player to reach the
//! winning score ends the game.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `TurnEngine` owns `GameState` and performs no I/O. It
//!    returns a `RollResult` and the host redraws from it.
//!
//! 2. **Deterministic randomness**: all randomness goes through a seeded
//!    `GameRng`, so a game is reproducible from its seed.
//!
//! 3. **Configuration over variants**: winning score, point label and
//!    randomized turn order are `GameConfig` settings, not separate rule sets.
//!
//! ## Modules
//!
//! - `core`: players, state, roll records, RNG, configuration
//! - `roster`: building the player list from raw name inputs
//! - `shuffle`: unbiased turn-order permutation
//! - `rules`: parity scoring and the turn engine
//! - `presentation`: screens, reveal sequence and view model for UIs
//!
//! ## Example
//!
//! ```
//! use parity_dice::{build_roster, TurnEngine, TurnStatus};
//!
//! let mut engine = TurnEngine::new(build_roster(&["Alice", "Bob"]), 4);
//!
//! let result = engine.submit_roll(2).unwrap();
//! assert_eq!(result.message, "Alice rolled 2 (EVEN) -> Gained 1 Chip!");
//! assert_eq!(result.status, TurnStatus::InProgress);
//! assert_eq!(engine.state().current().name, "Bob");
//! ```

pub mod core;
pub mod error;
pub mod presentation;
pub mod roster;
pub mod rules;
pub mod shuffle;

pub use crate::core::{
    GameConfig, GameRng, GameState, Parity, Player, PlayerId, RevealConfig, RollOutcome, RollRecord,
    MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::error::{GameError, Result};

pub use crate::presentation::{GameView, PlayerView, RevealSequence, RevealTick, Screen, Session};

pub use crate::roster::{build_roster, validate_player_count};

pub use crate::rules::{RollResult, TurnEngine, TurnStatus};

pub use crate::shuffle::ShuffleAssigner;
