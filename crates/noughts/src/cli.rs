//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Terminal columns per board cell
        #[arg(long)]
        cell_width: Option<u16>,

        /// Terminal rows per board cell
        #[arg(long)]
        cell_height: Option<u16>,

        /// File to write logs to
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config,
}
