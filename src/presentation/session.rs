//! Session: setup -> (reveal) -> play -> win -> setup again.
//!
//! `Session` is the adapter a UI talks to. It checks the player count,
//! builds the roster, shuffles it when configured, gates roll input while the
//! reveal runs, and keeps the last status message for redraws. All scoring
//! decisions stay in `TurnEngine`.

use crate::core::{GameConfig, GameRng};
use crate::error::{GameError, Result};
use crate::roster::{build_roster, validate_player_count};
use crate::rules::{RollResult, TurnEngine};
use crate::shuffle::ShuffleAssigner;

use super::reveal::{RevealSequence, RevealTick};
use super::view::{GameView, Screen};

/// One table of players across any number of games.
pub struct Session {
    config: GameConfig,
    rng: GameRng,
    engine: Option<TurnEngine>,
    reveal: Option<RevealSequence>,
    last_message: Option<String>,
    games_started: u32,
}

impl Session {
    /// Create a session with an explicit RNG.
    ///
    /// Fails with `GameError::InvalidConfig` if the config breaks an invariant
    /// (possible when it was edited in place rather than built).
    pub fn new(config: GameConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            rng,
            engine: None,
            reveal: None,
            last_message: None,
            games_started: 0,
        })
    }

    /// Create a session with a fixed seed (reproducible turn orders and rolls).
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, GameRng::new(seed))
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The running game, if any.
    #[must_use]
    pub fn engine(&self) -> Option<&TurnEngine> {
        self.engine.as_ref()
    }

    /// Which screen applies right now.
    #[must_use]
    pub fn screen(&self) -> Screen {
        match &self.engine {
            None => Screen::Setup,
            Some(engine) if engine.state().is_over() => Screen::Win,
            Some(_) => Screen::Game,
        }
    }

    /// True while the turn-order reveal still has ticks to show.
    #[must_use]
    pub fn reveal_pending(&self) -> bool {
        self.reveal.as_ref().is_some_and(|r| !r.is_finished())
    }

    /// Whether a roll would be accepted right now.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.screen() == Screen::Game && !self.reveal_pending()
    }

    /// Start a game from raw name inputs.
    ///
    /// Replaces any game already on the table.
    pub fn start_game<S: AsRef<str>>(&mut self, names: &[S]) -> Result<GameView> {
        validate_player_count(names.len())?;

        let mut roster = build_roster(names);
        self.games_started += 1;
        self.reveal = None;
        self.last_message = None;

        if self.config.shuffle_turn_order {
            ShuffleAssigner::new(&mut self.rng).shuffle_in_place(&mut roster);

            let reveal_rng = self.rng.for_context(&format!("reveal-{}", self.games_started));
            self.reveal = Some(RevealSequence::new(roster.len(), reveal_rng, self.config.reveal));
        }

        log::info!(
            "game {} started: {} players, first to {} (seed {}), order [{}]",
            self.games_started,
            roster.len(),
            self.config.winning_score,
            self.rng.seed(),
            roster.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", "),
        );

        self.engine = Some(TurnEngine::from_config(roster, &self.config));
        Ok(self.view())
    }

    /// Next reveal frame, or `None` once the reveal is drained.
    pub fn next_reveal_tick(&mut self) -> Option<RevealTick> {
        let reveal = self.reveal.as_mut()?;
        let tick = reveal.next();
        if reveal.is_finished() {
            self.reveal = None;
        }
        tick
    }

    /// Cancel the rest of the reveal and enable input.
    pub fn skip_reveal(&mut self) {
        if let Some(mut reveal) = self.reveal.take() {
            reveal.cancel();
        }
    }

    fn accepting_engine(&mut self) -> Result<&mut TurnEngine> {
        if self.reveal_pending() {
            log::warn!("roll rejected: turn order reveal still running");
            return Err(GameError::RevealPending);
        }
        let engine = self.engine.as_mut().ok_or(GameError::NoGameInProgress)?;
        if let Some(winner) = engine.state().winner() {
            log::warn!("roll rejected: game already won by {winner}");
            return Err(GameError::GameOver { winner });
        }
        Ok(engine)
    }

    /// Submit a roll made outside the game (e.g. a physical die).
    pub fn submit_roll(&mut self, roll: i64) -> Result<RollResult> {
        let result = self.accepting_engine()?.submit_roll(roll)?;
        self.last_message = Some(result.message.clone());
        Ok(result)
    }

    /// Roll the configured die for the current player and submit it.
    pub fn roll_and_submit(&mut self) -> Result<RollResult> {
        self.accepting_engine()?;
        let roll = self.roll_die();
        self.submit_roll(roll)
    }

    /// Roll the configured die without submitting it.
    pub fn roll_die(&mut self) -> i64 {
        self.rng.roll_die(self.config.die_faces)
    }

    /// Drop the current game and go back to setup.
    pub fn new_game(&mut self) {
        self.skip_reveal();
        self.engine = None;
        self.last_message = None;
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> GameView {
        match &self.engine {
            None => GameView::setup(self.config.winning_score),
            Some(engine) => {
                GameView::from_state(engine.state(), self.last_message.clone(), self.input_enabled())
            }
        }
    }
}
