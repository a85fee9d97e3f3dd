//! Read-only view model for hosts to render.

use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Which screen the host should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Collecting player names.
    Setup,
    /// Game in progress.
    Game,
    /// Someone won.
    Win,
}

/// One scoreboard card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub score: u32,
    /// Highlighted as the player to act.
    pub is_active: bool,
}

/// Snapshot of everything on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub screen: Screen,
    /// Scoreboard in turn order. Empty on the setup screen.
    pub players: Vec<PlayerView>,
    pub active_player_name: Option<String>,
    pub winner: Option<String>,
    pub last_message: Option<String>,
    pub winning_score: u32,
    /// Whether the host should accept a roll right now.
    pub input_enabled: bool,
}

impl GameView {
    /// View of the setup screen.
    #[must_use]
    pub fn setup(winning_score: u32) -> Self {
        Self {
            screen: Screen::Setup,
            players: Vec::new(),
            active_player_name: None,
            winner: None,
            last_message: None,
            winning_score,
            input_enabled: false,
        }
    }

    /// View of a running or finished game.
    #[must_use]
    pub fn from_state(state: &GameState, last_message: Option<String>, input_enabled: bool) -> Self {
        let current = state.current_player();
        let players = state
            .player_ids()
            .map(|id| {
                let player = state.player(id);
                PlayerView {
                    name: player.name.clone(),
                    score: player.score,
                    is_active: id == current,
                }
            })
            .collect();

        let winner = state.winner().map(|id| state.player(id).name.clone());
        let screen = if winner.is_some() { Screen::Win } else { Screen::Game };

        Self {
            screen,
            players,
            active_player_name: Some(state.current().name.clone()),
            winner,
            last_message,
            winning_score: state.winning_score(),
            input_enabled: input_enabled && screen == Screen::Game,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_setup_view() {
        let view = GameView::setup(10);

        assert_eq!(view.screen, Screen::Setup);
        assert!(view.players.is_empty());
        assert!(!view.input_enabled);
    }

    #[test]
    fn test_active_highlight() {
        let state = GameState::new(vec![Player::new("A"), Player::new("B")], 10);
        let view = GameView::from_state(&state, None, true);

        assert_eq!(view.screen, Screen::Game);
        assert!(view.players[0].is_active);
        assert!(!view.players[1].is_active);
        assert_eq!(view.active_player_name.as_deref(), Some("A"));
        assert!(view.input_enabled);
    }

    #[test]
    fn test_view_serde() {
        let state = GameState::new(vec![Player::new("A"), Player::new("B")], 4);
        let view = GameView::from_state(&state, Some("hello".into()), false);

        let json = serde_json::to_string(&view).unwrap();
        let deserialized: GameView = serde_json::from_str(&json).unwrap();

        assert_eq!(view, deserialized);
    }
}
