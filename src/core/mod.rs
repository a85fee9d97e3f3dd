//! Core types: players, state, roll records, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;
pub mod roll;
pub mod state;

pub use config::{GameConfig, RevealConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use roll::{Parity, RollOutcome, RollRecord};
pub use state::GameState;
