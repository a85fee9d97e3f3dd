//! Authoritative game state.
//!
//! `GameState` holds the roster (in turn order), whose turn it is, the
//! winning threshold and the roll history. It is owned by `TurnEngine`;
//! everything outside the crate sees it read-only.
//!
//! ## Invariants
//!
//! - `current_player` always indexes into `players`
//! - scores are never negative (`u32`)
//! - `winner` is set at most once and never cleared

use im::Vector;
use serde::Serialize;

use super::player::{Player, PlayerId};
use super::roll::RollRecord;

/// Game state for one session.
///
/// Uses an `im` vector for history so presentation snapshots clone in O(1).
/// Serialize-only: a state can be exported for display, never loaded.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    players: Vec<Player>,

    current_player: PlayerId,

    winning_score: u32,

    /// Turn number (starts at 1, incremented on every turn advance).
    pub turn_number: u32,

    winner: Option<PlayerId>,

    history: Vector<RollRecord>,
}

impl GameState {
    /// Create a state with the first seat to act.
    #[must_use]
    pub fn new(players: Vec<Player>, winning_score: u32) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");
        assert!(winning_score > 0, "Winning score must be positive");
        assert!(
            players.iter().all(|p| p.score == 0),
            "Players must start with a score of 0"
        );

        Self {
            players,
            current_player: PlayerId::new(0),
            winning_score,
            turn_number: 1,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Seat whose turn it is. After a win, this is the winner's seat.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        self.player(self.current_player)
    }

    /// Score needed to win.
    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// Seat of the winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Check if the game has been won.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Every roll so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RollRecord> {
        &self.history
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    // === Engine-only mutation ===

    pub(crate) fn record_roll(&mut self, record: RollRecord) {
        self.history.push_back(record);
    }

    /// Pass the turn to the next seat.
    pub(crate) fn advance_turn(&mut self) {
        debug_assert!(self.winner.is_none(), "No turns after a win");
        self.current_player = self.current_player.next(self.players.len());
        self.turn_number += 1;
    }

    pub(crate) fn declare_winner(&mut self, id: PlayerId) {
        debug_assert!(self.winner.is_none(), "Winner declared twice");
        self.winner = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::roll::RollOutcome;

    fn roster(names: &[&str]) -> Vec<Player> {
        names.iter().map(|&n| Player::new(n)).collect()
    }

    #[test]
    fn test_state_new() {
        let state = GameState::new(roster(&["A", "B", "C"]), 10);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.current().name, "A");
        assert_eq!(state.winning_score(), 10);
        assert!(!state.is_over());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_turn_advance_wraps() {
        let mut state = GameState::new(roster(&["A", "B"]), 10);

        state.advance_turn();
        assert_eq!(state.current().name, "B");
        assert_eq!(state.turn_number, 2);

        state.advance_turn();
        assert_eq!(state.current().name, "A");
        assert_eq!(state.turn_number, 3);
    }

    #[test]
    fn test_declare_winner() {
        let mut state = GameState::new(roster(&["A", "B"]), 1);
        state.declare_winner(PlayerId::new(1));

        assert!(state.is_over());
        assert_eq!(state.winner(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_history_snapshot_is_independent() {
        let mut state = GameState::new(roster(&["A", "B"]), 10);
        state.record_roll(RollRecord {
            player: PlayerId::new(0),
            roll: 4,
            outcome: RollOutcome::Gained,
            score_after: 1,
            turn: 1,
        });

        let snapshot = state.clone();
        state.record_roll(RollRecord {
            player: PlayerId::new(1),
            roll: 3,
            outcome: RollOutcome::StayedAtZero,
            score_after: 0,
            turn: 2,
        });

        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_state_serde() {
        let state = GameState::new(roster(&["A", "B"]), 4);

        let json: serde_json::Value = serde_json::to_value(&state).unwrap();

        assert_eq!(json["winning_score"], 4);
        assert_eq!(json["players"][1]["name"], "B");
        assert_eq!(json["players"][1]["score"], 0);
        assert!(json["winner"].is_null());
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_empty_roster() {
        GameState::new(Vec::new(), 10);
    }

    #[test]
    #[should_panic(expected = "Players must start with a score of 0")]
    fn test_roster_with_prior_score() {
        let mut players = roster(&["A", "B"]);
        players[0].score = 9;
        GameState::new(players, 4);
    }
}
