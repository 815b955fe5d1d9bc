//! Win and draw detection for tic-tac-toe.
//!
//! Both checks are pure functions of the board; [`evaluate`] combines them
//! into the status a [`GameState`](crate::GameState) reports.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{Win, check_win};

use crate::game::GameStatus;
use crate::types::Board;
use tracing::instrument;

/// Derives the game status from the board alone.
///
/// A win takes precedence over a full board.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(win) = check_win(board) {
        GameStatus::Won {
            player: win.player,
            line: win.line,
        }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, WinLine};

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let board = Board::try_from([["X", "O", "X"], ["O", "X", "O"], ["O", "X", "X"]]).unwrap();
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                player: Player::X,
                line: WinLine::MainDiagonal,
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::try_from([["X", "O", "X"], ["X", "O", "O"], ["O", "X", "X"]]).unwrap();
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }
}
