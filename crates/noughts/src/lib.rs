//! Terminal tic-tac-toe for two players sharing one keyboard and mouse.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for cell size and logging
//! - **Layout**: centers the board and maps clicks back to cells
//! - **App**: owns the [`noughts_core::GameState`] and handles events
//! - **UI**: stateless ratatui rendering
//! - **TUI**: terminal setup and the blocking event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;
mod layout;
mod tui;
mod ui;

pub use app::{App, Flow};
pub use config::{AppConfig, CELL_HEIGHT_RANGE, CELL_WIDTH_RANGE, ConfigError};
pub use input::{Cursor, digit_cell};
pub use layout::{BoardLayout, HUD_HEIGHT, Hit, RESTART_LABEL};
pub use tui::run_tui;
pub use ui::draw;
