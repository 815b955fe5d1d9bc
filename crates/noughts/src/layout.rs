//! Screen geometry: where the board and HUD sit, and what a click hits.

use derive_getters::Getters;
use noughts_core::GRID;
use ratatui::layout::{Position, Rect};
use tracing::instrument;

/// Text of the clickable reset control.
pub const RESTART_LABEL: &str = "[ Restart ]";

/// Rows below the board: a spacer, the status line and the restart label.
pub const HUD_HEIGHT: u16 = 3;

/// What lies under a terminal coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell {
        /// Board row.
        row: usize,
        /// Board column.
        col: usize,
    },
    /// The restart label.
    Restart,
    /// Anything else, including the status line.
    Outside,
}

/// Board and HUD placement for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardLayout {
    board: Rect,
    cells: [[Rect; GRID]; GRID],
    status: Rect,
    restart: Rect,
    cell_width: u16,
    cell_height: u16,
}

impl BoardLayout {
    /// Centers a board of `cell_width` x `cell_height` cells, with the HUD
    /// underneath, inside `area`. Parts that do not fit are clipped.
    #[instrument(level = "trace")]
    pub fn new(area: Rect, cell_width: u16, cell_height: u16) -> Self {
        let grid = GRID as u16;
        let board_width = cell_width.saturating_mul(grid);
        let board_height = cell_height.saturating_mul(grid);
        let total_height = board_height.saturating_add(HUD_HEIGHT);

        let x = area.x + area.width.saturating_sub(board_width) / 2;
        let y = area.y + area.height.saturating_sub(total_height) / 2;

        let board = Rect::new(x, y, board_width, board_height).intersection(area);

        let mut cells = [[Rect::default(); GRID]; GRID];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = Rect::new(
                    x.saturating_add((col as u16).saturating_mul(cell_width)),
                    y.saturating_add((row as u16).saturating_mul(cell_height)),
                    cell_width,
                    cell_height,
                )
                .intersection(area);
            }
        }

        let hud_y = y.saturating_add(board_height);
        let status = Rect::new(area.x, hud_y.saturating_add(1), area.width, 1).intersection(area);

        let label_width = RESTART_LABEL.len() as u16;
        let restart = Rect::new(
            area.x + area.width.saturating_sub(label_width) / 2,
            hud_y.saturating_add(2),
            label_width,
            1,
        )
        .intersection(area);

        Self {
            board,
            cells,
            status,
            restart,
            cell_width,
            cell_height,
        }
    }

    /// Maps a terminal coordinate to the thing drawn there.
    ///
    /// Cells are found from the board origin and the fixed cell size.
    #[instrument(level = "trace", skip(self))]
    pub fn hit_test(&self, column: u16, row: u16) -> Hit {
        let position = Position::new(column, row);

        if self.restart.contains(position) {
            return Hit::Restart;
        }
        if !self.board.contains(position) || self.cell_width == 0 || self.cell_height == 0 {
            return Hit::Outside;
        }

        let col = usize::from((column - self.board.x) / self.cell_width);
        let row = usize::from((row - self.board.y) / self.cell_height);
        if row < GRID && col < GRID {
            Hit::Cell { row, col }
        } else {
            Hit::Outside
        }
    }

    /// Returns the rectangle of one cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<Rect> {
        self.cells.get(row).and_then(|line| line.get(col)).copied()
    }
}
