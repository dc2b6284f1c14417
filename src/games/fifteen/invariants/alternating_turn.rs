//! Alternating turn invariant: marks alternate starting from the first mover.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: exactly one player acts per turn, alternating strictly.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let applied = game.history().applied();

        if applied.first().is_some_and(|m| m.mark() != game.first_mover()) {
            return false;
        }

        if applied.windows(2).any(|w| w[0].mark() == w[1].mark()) {
            return false;
        }

        let expected_next = if applied.len() % 2 == 0 {
            game.first_mover()
        } else {
            game.first_mover().opponent()
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
