//! Mark balance invariant: X is never behind O, and never more than one ahead.

use super::Invariant;
use crate::game::GameState;
use crate::types::Player;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_empty_game_holds() {
        assert!(MarkBalanceInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut game = GameState::new();
        game.board.set(0, 0, Square::Occupied(Player::X)).unwrap();
        game.board.set(0, 1, Square::Occupied(Player::X)).unwrap();
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
