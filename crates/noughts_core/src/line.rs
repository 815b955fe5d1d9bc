//! Rows, columns and diagonals of the board.

use derive_more::Display;

use crate::types::GRID;

/// The shape of a line, without its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum LineKind {
    /// A horizontal line.
    Row,
    /// A vertical line.
    Column,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A line of three cells that can win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum WinLine {
    /// Row by index.
    #[display("row {_0}")]
    Row(usize),
    /// Column by index.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl WinLine {
    /// Every line, in the order wins are looked for: rows, then columns,
    /// then the two diagonals.
    pub const ALL: [WinLine; 8] = [
        WinLine::Row(0),
        WinLine::Row(1),
        WinLine::Row(2),
        WinLine::Column(0),
        WinLine::Column(1),
        WinLine::Column(2),
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    /// Returns the kind of line.
    pub fn kind(self) -> LineKind {
        match self {
            WinLine::Row(_) => LineKind::Row,
            WinLine::Column(_) => LineKind::Column,
            WinLine::MainDiagonal => LineKind::MainDiagonal,
            WinLine::AntiDiagonal => LineKind::AntiDiagonal,
        }
    }

    /// Returns the row or column index for straight lines.
    pub fn index(self) -> Option<usize> {
        match self {
            WinLine::Row(i) | WinLine::Column(i) => Some(i),
            WinLine::MainDiagonal | WinLine::AntiDiagonal => None,
        }
    }

    /// Returns the `(row, col)` coordinates covered by the line, or `None`
    /// for a row or column index off the grid.
    pub fn cells(self) -> Option<[(usize, usize); GRID]> {
        match self {
            WinLine::Row(r) | WinLine::Column(r) if r >= GRID => None,
            WinLine::Row(r) => Some([(r, 0), (r, 1), (r, 2)]),
            WinLine::Column(c) => Some([(0, c), (1, c), (2, c)]),
            WinLine::MainDiagonal => Some([(0, 0), (1, 1), (2, 2)]),
            WinLine::AntiDiagonal => Some([(0, 2), (1, 1), (2, 0)]),
        }
    }

    /// Returns true if the line passes through `(row, col)`.
    pub fn contains(self, row: usize, col: usize) -> bool {
        self.cells().is_some_and(|cells| cells.contains(&(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_index() {
        assert_eq!(WinLine::Row(2).kind(), LineKind::Row);
        assert_eq!(WinLine::Row(2).index(), Some(2));
        assert_eq!(WinLine::Column(1).kind(), LineKind::Column);
        assert_eq!(WinLine::AntiDiagonal.index(), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(LineKind::MainDiagonal.to_string(), "main-diagonal");
        assert_eq!(LineKind::AntiDiagonal.to_string(), "anti-diagonal");
        assert_eq!(LineKind::Column.to_string(), "column");
    }

    #[test]
    fn test_anti_diagonal_cells() {
        let line = WinLine::AntiDiagonal;
        assert!(line.contains(0, 2));
        assert!(line.contains(1, 1));
        assert!(line.contains(2, 0));
        assert!(!line.contains(0, 0));
    }

    #[test]
    fn test_off_grid_index_covers_nothing() {
        assert_eq!(WinLine::Row(7).cells(), None);
        assert_eq!(WinLine::Column(3).cells(), None);
        for row in 0..GRID {
            for col in 0..GRID {
                assert!(!WinLine::Row(7).contains(row, col));
                assert!(!WinLine::Column(3).contains(row, col));
            }
        }
        assert_eq!(WinLine::Row(2).cells(), Some([(2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn test_every_cell_is_on_some_line() {
        for row in 0..GRID {
            for col in 0..GRID {
                assert!(WinLine::ALL.iter().any(|line| line.contains(row, col)));
            }
        }
    }
}
