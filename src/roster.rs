//! Roster setup: turning raw name inputs into players.
//!
//! Blank inputs are not errors. They get a positional placeholder
//! ("Player 3" for the third input). The player count is checked by the
//! caller collecting the inputs (see `validate_player_count`), never here.

use crate::core::{Player, PlayerId, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{GameError, Result};

/// Build a roster from raw name inputs, preserving input order.
///
/// ```
/// use parity_dice::roster::build_roster;
///
/// let roster = build_roster(&["  Alice ", "", "Bob"]);
/// assert_eq!(roster[0].name, "Alice");
/// assert_eq!(roster[1].name, "Player 2");
/// assert_eq!(roster[2].name, "Bob");
/// assert!(roster.iter().all(|p| p.score == 0));
/// ```
pub fn build_roster<S: AsRef<str>>(names: &[S]) -> Vec<Player> {
    names
        .iter()
        .zip(PlayerId::all(names.len()))
        .map(|(raw, seat)| {
            let trimmed = raw.as_ref().trim();
            if trimmed.is_empty() {
                Player::new(seat.placeholder_name())
            } else {
                Player::new(trimmed)
            }
        })
        .collect()
}

/// Check a name count against the supported table size.
pub fn validate_player_count(count: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(GameError::InvalidPlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}
