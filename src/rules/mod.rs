//! Game rules: the parity scoring policy and the turn engine that applies it.
//!
//! `TurnEngine` is the only thing that mutates `GameState`. Hosts feed it
//! one roll per turn and redraw from the returned `RollResult`.

pub mod engine;
pub mod scoring;

pub use engine::{RollResult, TurnEngine, TurnStatus};
