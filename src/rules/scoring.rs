//! The fixed parity scoring rule.
//!
//! - Even roll: +1
//! - Odd roll: -1, clamped at zero

use crate::core::{Parity, Player, RollOutcome};

/// Apply one roll to a player's score.
pub fn apply_roll(player: &mut Player, roll: i64) -> RollOutcome {
    match Parity::of(roll) {
        Parity::Even => {
            player.gain_point();
            RollOutcome::Gained
        }
        Parity::Odd => {
            if player.lose_point() {
                RollOutcome::Lost
            } else {
                RollOutcome::StayedAtZero
            }
        }
    }
}

/// Human-readable status line for a roll.
pub fn describe_roll(name: &str, roll: i64, outcome: RollOutcome, point_label: &str) -> String {
    let parity = Parity::of(roll);
    match outcome {
        RollOutcome::Gained => format!("{name} rolled {roll} ({parity}) -> Gained 1 {point_label}!"),
        RollOutcome::Lost => format!("{name} rolled {roll} ({parity}) -> Lost 1 {point_label}."),
        RollOutcome::StayedAtZero => format!("{name} rolled {roll} ({parity}) -> Stayed at 0."),
    }
}
