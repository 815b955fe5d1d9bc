//! Turn state and move handling for tic-tac-toe.

use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

use crate::line::WinLine;
use crate::rules;
use crate::types::{Board, GRID, Player, Square};

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A player completed a line.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(self) -> Option<WinLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Why a mark could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside the grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Complete game state: board, whose turn it is, and the derived status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is (or who made the final move).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(previous = ?self.status, "Resetting game");
        *self = Self::new();
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Out-of-bounds coordinates, occupied cells and finished games leave the
    /// state untouched. The turn is not advanced; see [`GameState::play`].
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] describing the failed precondition.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_place_mark(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if row >= GRID || col >= GRID {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.board.is_empty(row, col) {
            return Err(MoveError::Occupied { row, col });
        }

        self.board
            .set(row, col, Square::Occupied(self.current_player))
            .map_err(|_| MoveError::OutOfBounds { row, col })?;
        self.status = rules::evaluate(&self.board);
        debug!(status = ?self.status, "Mark placed");
        Ok(())
    }

    /// Places the current player's mark, ignoring invalid requests.
    ///
    /// Returns `true` if the mark was written.
    pub fn place_mark(&mut self, row: usize, col: usize) -> bool {
        match self.try_place_mark(row, col) {
            Ok(()) => true,
            Err(error) => {
                debug!(%error, row, col, "Ignoring mark");
                false
            }
        }
    }

    /// Hands the turn to the other player.
    ///
    /// Finished games keep their last player.
    #[instrument(skip(self))]
    pub fn advance_turn(&mut self) {
        if self.status.is_over() {
            warn!(status = ?self.status, "Turn not advanced on a finished game");
            return;
        }
        self.current_player = self.current_player.opponent();
    }

    /// Plays one full turn: places the mark and, if the game goes on,
    /// advances to the next player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without touching the state if the move is illegal.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        self.try_place_mark(row, col)?;

        match self.status {
            GameStatus::InProgress => self.advance_turn(),
            GameStatus::Won { player, line } => {
                info!(%player, %line, kind = %line.kind(), "Game won");
            }
            GameStatus::Draw => info!("Game drawn"),
        }

        // Mixing place_mark/advance_turn with play can unbalance the marks.
        if let Err(violations) = crate::invariants::check(self) {
            warn!(?violations, "Game invariants broken after move");
        }

        Ok(self.status)
    }

    /// Formats the status line shown under the board.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won { player, .. } => format!("Player {} wins!", player),
            GameStatus::Draw => "Draw! No more moves.".to_string(),
        }
    }
}
