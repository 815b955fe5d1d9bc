//! Application state and event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::GameState;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::input::{Cursor, digit_cell};
use crate::layout::{BoardLayout, Hit};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the one [`GameState`] and the geometry of the last drawn frame,
/// which pointer events are resolved against.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Cursor,
    layout: Option<BoardLayout>,
    cell_width: u16,
    cell_height: u16,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: GameState::new(),
            cursor: Cursor::new(1, 1),
            layout: None,
            cell_width: *config.cell_width(),
            cell_height: *config.cell_height(),
            show_cell_numbers: *config.show_cell_numbers(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Terminal columns and rows per cell.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_width, self.cell_height)
    }

    /// Whether empty cells show their digit.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Records the geometry of the frame just drawn.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = Some(layout);
    }

    /// Handles one terminal event to completion.
    pub fn handle_event(&mut self, event: &Event) -> Flow {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(*key),
            Event::Mouse(mouse) => {
                self.handle_mouse(*mouse);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    #[instrument(skip(self))]
    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Flow::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let Cursor { row, col } = self.cursor;
                self.play(row, col);
            }
            KeyCode::Char(c) => {
                if let Some((row, col)) = digit_cell(c) {
                    self.play(row, col);
                }
            }
            code => self.cursor = self.cursor.moved(code),
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer_down(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up(mouse.column, mouse.row),
            _ => {}
        }
    }

    /// A press lands on a cell: try to play there.
    #[instrument(skip(self))]
    pub fn pointer_down(&mut self, column: u16, row: u16) {
        let Some(layout) = &self.layout else {
            debug!("No frame drawn yet, ignoring click");
            return;
        };
        if let Hit::Cell { row, col } = layout.hit_test(column, row) {
            self.play(row, col);
        }
    }

    /// A release over the restart label resets the game.
    #[instrument(skip(self))]
    pub fn pointer_up(&mut self, column: u16, row: u16) {
        if let Some(layout) = &self.layout
            && layout.hit_test(column, row) == Hit::Restart
        {
            self.restart();
        }
    }

    /// Restarts the game regardless of its status.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Cursor::new(1, 1);
    }

    fn play(&mut self, row: usize, col: usize) {
        match self.game.play(row, col) {
            Ok(status) => {
                debug!(row, col, ?status, "Move applied");
                self.cursor = Cursor::new(row, col);
            }
            Err(error) => debug!(%error, row, col, "Move ignored"),
        }
    }
}
