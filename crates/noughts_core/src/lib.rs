//! Tic-tac-toe rules, free of any rendering or input concerns.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`]
//! - **Lines**: [`WinLine`] names a row, column or diagonal
//! - **Rules**: pure [`check_win`] and [`is_full`] checks
//! - **Game**: [`GameState`] owns the board and drives turns
//! - **Invariants**: properties that hold after every turn
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameState, GameStatus, Player, WinLine};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.play(row, col).unwrap();
//! }
//! assert_eq!(
//!     game.status(),
//!     GameStatus::Won { player: Player::X, line: WinLine::Row(0) }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod invariants;
mod line;
mod rules;
mod types;

pub use game::{GameState, GameStatus, MoveError};
pub use line::{LineKind, WinLine};
pub use rules::{Win, check_win, evaluate, is_full};
pub use types::{Board, BoardError, GRID, Player, Square};
