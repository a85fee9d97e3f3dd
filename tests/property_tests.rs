//! Property tests for the scoring and turn invariants.

use proptest::prelude::*;

use parity_dice::core::{Parity, RollOutcome};
use parity_dice::roster::build_roster;
use parity_dice::rules::{TurnEngine, TurnStatus};

fn table() -> impl Strategy<Value = (usize, u32, Vec<i64>)> {
    (2usize..=10, 1u32..=15, prop::collection::vec(-50i64..=50, 0..300))
}

proptest! {
    /// Score deltas, floor clamp, rotation and win detection hold on every roll.
    #[test]
    fn prop_roll_invariants((players, winning_score, rolls) in table()) {
        let names = vec![""; players];
        let mut engine = TurnEngine::new(build_roster(&names), winning_score);

        for roll in rolls {
            let seat = engine.state().current_player();
            let before = engine.state().player(seat).score;

            let result = engine.submit_roll(roll).unwrap();
            let after = engine.state().player(seat).score;

            prop_assert_eq!(result.player, seat);
            match (Parity::of(roll), before) {
                (Parity::Even, _) => {
                    prop_assert_eq!(result.outcome, RollOutcome::Gained);
                    prop_assert_eq!(after, before + 1);
                }
                (Parity::Odd, 0) => {
                    prop_assert_eq!(result.outcome, RollOutcome::StayedAtZero);
                    prop_assert_eq!(after, 0);
                }
                (Parity::Odd, _) => {
                    prop_assert_eq!(result.outcome, RollOutcome::Lost);
                    prop_assert_eq!(after, before - 1);
                }
            }

            let won = after >= winning_score;
            prop_assert_eq!(result.status.is_won(), won);
            if let TurnStatus::Won(winner) = &result.status {
                prop_assert_eq!(winner, engine.state().player(seat));
                prop_assert_eq!(engine.state().current_player(), seat);
                break;
            }

            prop_assert_eq!(engine.state().current_player(), seat.next(players));
            for player in engine.state().players() {
                prop_assert!(player.score < winning_score);
            }
        }
    }

    /// Only the acting player's score ever changes.
    #[test]
    fn prop_only_actor_changes((players, winning_score, rolls) in table()) {
        let names = vec!["x"; players];
        let mut engine = TurnEngine::new(build_roster(&names), winning_score);

        for roll in rolls {
            if engine.state().is_over() {
                break;
            }
            let seat = engine.state().current_player();
            let before = engine.state().players().to_vec();

            engine.submit_roll(roll).unwrap();

            for (i, (old, new)) in before.iter().zip(engine.state().players()).enumerate() {
                if i != seat.index() {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }

    /// Roster names are never empty and keep input order.
    #[test]
    fn prop_roster_names(names in prop::collection::vec("[ a-z]{0,6}", 2..=10)) {
        let roster = build_roster(&names);

        prop_assert_eq!(roster.len(), names.len());
        for (i, (raw, player)) in names.iter().zip(&roster).enumerate() {
            prop_assert!(!player.name.is_empty());
            prop_assert_eq!(player.score, 0);
            if raw.trim().is_empty() {
                prop_assert_eq!(player.name.clone(), format!("Player {}", i + 1));
            } else {
                prop_assert_eq!(player.name.as_str(), raw.trim());
            }
        }
    }
}
