//! Win detection logic for tic-tac-toe.

use crate::line::WinLine;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Win {
    /// The player with three in a row.
    pub player: Player,
    /// Where the three marks are.
    pub line: WinLine,
}

/// Checks if there is a winner on the board.
///
/// Lines are examined in [`WinLine::ALL`] order (rows, columns, main
/// diagonal, anti-diagonal) and the first complete one is returned.
#[instrument(level = "trace", skip(board))]
pub fn check_win(board: &Board) -> Option<Win> {
    WinLine::ALL
        .into_iter()
        .find_map(|line| match board.line(line)? {
            [Square::Occupied(player), b, c] if b == Square::Occupied(player) && c == b => {
                Some(Win { player, line })
            }
            _ => None,
        })
}
