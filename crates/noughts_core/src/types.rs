//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use strum::EnumIter;
use tracing::instrument;

use crate::line::WinLine;

/// Number of rows (and columns) on the board.
pub const GRID: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Player {
    /// Player X (goes first).
    #[default]
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Square {
    /// Returns the player whose mark is in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Errors raised when building or writing to a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinates fall outside the grid.
    #[display("Cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// A textual mark was neither `X`, `O` nor empty.
    #[display("Unrecognized mark {mark:?} (expected \"X\", \"O\" or \"\")")]
    InvalidMark {
        /// The offending text.
        mark: String,
    },
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Square; GRID]; GRID],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Writes a cell.
    pub fn set(&mut self, row: usize, col: usize, square: Square) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(BoardError::OutOfBounds { row, col })?;
        *cell = square;
        Ok(())
    }

    /// Checks if a cell exists and is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Square; GRID]; GRID] {
        &self.cells
    }

    /// Returns the three cells along a line, or `None` if the line is off
    /// the grid.
    pub fn line(&self, line: WinLine) -> Option<[Square; GRID]> {
        line.cells()
            .map(|cells| cells.map(|(row, col)| self.cells[row][col]))
    }

    /// Iterates over every cell in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|square| *square == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => " ".to_string(),
                        Square::Occupied(player) => player.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

impl TryFrom<[[&str; GRID]; GRID]> for Board {
    type Error = BoardError;

    /// Builds a board from textual marks, e.g. `[["X", "O", ""], ...]`.
    #[instrument]
    fn try_from(rows: [[&str; GRID]; GRID]) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for (row, marks) in rows.iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                let square = match *mark {
                    "" => Square::Empty,
                    "X" => Square::Occupied(Player::X),
                    "O" => Square::Occupied(Player::O),
                    other => {
                        return Err(BoardError::InvalidMark {
                            mark: other.to_string(),
                        });
                    }
                };
                board.set(row, col, square)?;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        let err = board
            .set(3, 0, Square::Occupied(Player::X))
            .unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds { row: 3, col: 0 });
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let board = Board::new();
        assert_eq!(board.get(0, 3), None);
        assert!(!board.is_empty(5, 5));
    }

    #[test]
    fn test_parse_rows() {
        let board = Board::try_from([["X", "", ""], ["", "O", ""], ["", "", ""]]).unwrap();
        assert_eq!(board.get(0, 0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(1, 1), Some(Square::Occupied(Player::O)));
        assert_eq!(board.count(Player::X), 1);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_parse_rejects_unknown_mark() {
        let result = Board::try_from([["X", "Z", ""], ["", "", ""], ["", "", ""]]);
        assert!(matches!(result, Err(BoardError::InvalidMark { ref mark }) if mark == "Z"));
    }

    #[test]
    fn test_parse_is_exact() {
        for mark in ["x", "o", " X", "O ", " "] {
            let result = Board::try_from([[mark, "", ""], ["", "", ""], ["", "", ""]]);
            assert_eq!(
                result,
                Err(BoardError::InvalidMark {
                    mark: mark.to_string()
                })
            );
        }
    }

    #[test]
    fn test_line_off_grid() {
        let board = Board::try_from([["X", "X", "X"], ["", "", ""], ["", "", ""]]).unwrap();
        assert_eq!(board.line(WinLine::Row(7)), None);
        assert_eq!(
            board.line(WinLine::Row(0)),
            Some([Square::Occupied(Player::X); GRID])
        );
    }

    #[test]
    fn test_display() {
        let board = Board::try_from([["X", "O", ""], ["", "X", ""], ["", "", "O"]]).unwrap();
        assert_eq!(board.display(), "X|O| \n-+-+-\n |X| \n-+-+-\n | |O");
    }
}
