//! Turn engine: the single mutating entry point of a game.
//!
//! Each `submit_roll` call:
//! 1. applies the parity rule to the current player
//! 2. checks for a win (score >= threshold)
//! 3. advances the turn, unless the roll won the game
//!
//! The engine performs no I/O. It returns a status message for the host to
//! display and logs through the `log` facade.

use serde::{Deserialize, Serialize};

use super::scoring::{apply_roll, describe_roll};
use crate::core::{GameConfig, GameState, Player, PlayerId, RollOutcome, RollRecord};
use crate::error::{GameError, Result};

/// Where the game stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStatus {
    /// Rolls are still being accepted.
    InProgress,
    /// Terminal. Carries the winner as they stood at the winning roll.
    Won(Player),
}

impl TurnStatus {
    /// Check if this is the terminal state.
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self, TurnStatus::Won(_))
    }
}

/// Everything the host needs to redraw after a roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollResult {
    /// Seat that rolled.
    pub player: PlayerId,
    /// Effect on that player's score.
    pub outcome: RollOutcome,
    /// Status line for display.
    pub message: String,
    /// Game status after the roll.
    pub status: TurnStatus,
}

/// Owns the game state and applies rolls to it.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    state: GameState,
    point_label: String,
}

impl TurnEngine {
    /// Create an engine over a roster. The first player in the roster acts first.
    ///
    /// Every player must start at score 0.
    #[must_use]
    pub fn new(players: Vec<Player>, winning_score: u32) -> Self {
        Self {
            state: GameState::new(players, winning_score),
            point_label: "Chip".to_string(),
        }
    }

    /// Create an engine using a game configuration's threshold and label.
    #[must_use]
    pub fn from_config(players: Vec<Player>, config: &GameConfig) -> Self {
        Self::new(players, config.winning_score).with_point_label(config.point_label.clone())
    }

    /// Set the unit name used in messages.
    #[must_use]
    pub fn with_point_label(mut self, label: impl Into<String>) -> Self {
        self.point_label = label.into();
        self
    }

    /// Read-only view of the state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> TurnStatus {
        match self.state.winner() {
            Some(id) => TurnStatus::Won(self.state.player(id).clone()),
            None => TurnStatus::InProgress,
        }
    }

    /// Apply the current player's roll.
    ///
    /// Fails with `GameError::GameOver` once someone has won; the state is
    /// left untouched in that case.
    pub fn submit_roll(&mut self, roll: i64) -> Result<RollResult> {
        if let Some(winner) = self.state.winner() {
            log::warn!("roll {roll} rejected: game already won by {winner}");
            return Err(GameError::GameOver { winner });
        }

        let seat = self.state.current_player();
        let turn = self.state.turn_number;
        let player = self.state.player_mut(seat);
        let outcome = apply_roll(player, roll);
        let score_after = player.score;
        let message = describe_roll(&player.name, roll, outcome, &self.point_label);

        log::debug!("turn {turn}: {message} (score {score_after})");

        self.state.record_roll(RollRecord {
            player: seat,
            roll,
            outcome,
            score_after,
            turn,
        });

        let status = if score_after >= self.state.winning_score() {
            self.state.declare_winner(seat);
            let winner = self.state.player(seat).clone();
            log::info!("{} wins with {} on turn {turn}", winner.name, winner.score);
            TurnStatus::Won(winner)
        } else {
            self.state.advance_turn();
            TurnStatus::InProgress
        };

        Ok(RollResult {
            player: seat,
            outcome,
            message,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::build_roster;

    fn engine(names: &[&str], winning_score: u32) -> TurnEngine {
        TurnEngine::new(build_roster(names), winning_score)
    }

    #[test]
    fn test_even_roll_gains_and_advances() {
        let mut engine = engine(&["A", "B"], 10);

        let result = engine.submit_roll(4).unwrap();

        assert_eq!(result.player, PlayerId::new(0));
        assert_eq!(result.outcome, RollOutcome::Gained);
        assert_eq!(result.message, "A rolled 4 (EVEN) -> Gained 1 Chip!");
        assert_eq!(result.status, TurnStatus::InProgress);
        assert_eq!(engine.state().player(PlayerId::new(0)).score, 1);
        assert_eq!(engine.state().current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_odd_at_zero_stays_and_passes_turn() {
        let mut engine = engine(&["A", "B"], 10);

        let result = engine.submit_roll(3).unwrap();

        assert_eq!(result.outcome, RollOutcome::StayedAtZero);
        assert!(result.message.contains("Stayed at 0"));
        assert_eq!(engine.state().player(PlayerId::new(0)).score, 0);
        assert_eq!(engine.state().current().name, "B");
    }

    #[test]
    fn test_odd_with_points_loses() {
        let mut engine = engine(&["A", "B"], 10);

        engine.submit_roll(2).unwrap(); // A: 1
        engine.submit_roll(1).unwrap(); // B: 0
        let result = engine.submit_roll(5).unwrap(); // A: 0

        assert_eq!(result.outcome, RollOutcome::Lost);
        assert_eq!(result.message, "A rolled 5 (ODD) -> Lost 1 Chip.");
        assert_eq!(engine.state().player(PlayerId::new(0)).score, 0);
    }

    #[test]
    fn test_win_stops_turn_advance() {
        let mut engine = engine(&["A", "B"], 1);

        let result = engine.submit_roll(6).unwrap();

        assert_eq!(result.status, TurnStatus::Won(Player { name: "A".into(), score: 1 }));
        assert_eq!(engine.state().current_player(), PlayerId::new(0));
        assert_eq!(engine.state().turn_number, 1);
        assert!(engine.status().is_won());
    }

    #[test]
    fn test_roll_after_win_is_rejected() {
        let mut engine = engine(&["A", "B"], 1);
        engine.submit_roll(2).unwrap();

        let before = engine.state().clone();
        let err = engine.submit_roll(2).unwrap_err();

        assert_eq!(err, GameError::GameOver { winner: PlayerId::new(0) });
        assert_eq!(engine.state().players(), before.players());
        assert_eq!(engine.state().history().len(), 1);
    }

    #[test]
    #[should_panic(expected = "Players must start with a score of 0")]
    fn test_rejects_roster_already_past_threshold() {
        let mut leader = Player::new("A");
        leader.score = 9;
        let _ = TurnEngine::new(vec![leader, Player::new("B")], 4);
    }

    #[test]
    fn test_point_label_from_config() {
        let mut engine = TurnEngine::from_config(build_roster(&["A", "B"]), &GameConfig::quick());

        let result = engine.submit_roll(2).unwrap();

        assert_eq!(engine.state().winning_score(), 4);
        assert_eq!(result.message, "A rolled 2 (EVEN) -> Gained 1 Point!");
    }

    #[test]
    fn test_history_records_rolls() {
        let mut engine = engine(&["A", "B", "C"], 10);

        for roll in [2, 3, 4] {
            engine.submit_roll(roll).unwrap();
        }

        let history = engine.state().history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].player, PlayerId::new(0));
        assert_eq!(history[1].outcome, RollOutcome::StayedAtZero);
        assert_eq!(history[2].player, PlayerId::new(2));
        assert_eq!(history[2].score_after, 1);
        assert_eq!(history[2].turn, 3);
    }
}
