//! Keyboard navigation over the board.

use crossterm::event::KeyCode;
use noughts_core::GRID;

/// Keyboard-selected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Board row.
    pub row: usize,
    /// Board column.
    pub col: usize,
}

impl Cursor {
    /// Creates a cursor at `(row, col)`, clamped onto the board.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row: row.min(GRID - 1),
            col: col.min(GRID - 1),
        }
    }

    /// Moves the cursor with the arrow keys, stopping at the edges.
    pub fn moved(self, key: KeyCode) -> Self {
        match key {
            KeyCode::Up => Self::new(self.row.saturating_sub(1), self.col),
            KeyCode::Down => Self::new(self.row + 1, self.col),
            KeyCode::Left => Self::new(self.row, self.col.saturating_sub(1)),
            KeyCode::Right => Self::new(self.row, self.col + 1),
            _ => self,
        }
    }
}

/// Maps the digit keys 1-9 onto cells in row-major order.
pub fn digit_cell(c: char) -> Option<(usize, usize)> {
    let digit = c.to_digit(10)? as usize;
    (1..=GRID * GRID)
        .contains(&digit)
        .then(|| ((digit - 1) / GRID, (digit - 1) % GRID))
}
