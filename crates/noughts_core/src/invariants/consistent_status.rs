//! Status consistency invariant: the cached status is the one the board implies.

use super::Invariant;
use crate::game::GameState;
use crate::line::WinLine;
use crate::rules;
use crate::types::Player;
use strum::IntoEnumIterator;

/// Invariant: exactly one status holds and it matches the board.
///
/// Also rejects boards where both players own a complete line.
pub struct ConsistentStatusInvariant;

impl Invariant<GameState> for ConsistentStatusInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let winners = Player::iter()
            .filter(|player| {
                WinLine::ALL
                    .iter()
                    .filter_map(|line| board.line(*line))
                    .any(|squares| squares.iter().all(|sq| sq.player() == Some(*player)))
            })
            .count();

        winners <= 1 && game.status() == rules::evaluate(board)
    }

    fn description() -> &'static str {
        "Game status matches the board and names at most one winner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::types::{Board, Square};

    #[test]
    fn test_won_game_holds() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(row, col).unwrap();
        }
        assert!(ConsistentStatusInvariant::holds(&game));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut game = GameState::new();
        game.board = Board::try_from([["X", "X", "X"], ["O", "O", ""], ["", "", ""]]).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!ConsistentStatusInvariant::holds(&game));
    }

    #[test]
    fn test_two_winners_violates() {
        let mut game = GameState::new();
        game.board = Board::try_from([["X", "X", "X"], ["O", "O", "O"], ["", "", ""]]).unwrap();
        game.status = rules::evaluate(&game.board);
        assert!(!ConsistentStatusInvariant::holds(&game));

        game.board.set(1, 2, Square::Empty).unwrap();
        game.status = rules::evaluate(&game.board);
        assert!(ConsistentStatusInvariant::holds(&game));
    }
}
