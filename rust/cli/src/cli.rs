//! Command-line argument definitions for the `noughts` binary.
//!
//! One subcommand exists per engine operation (`move`, `state`,
//! `rename`, `reset`) plus the interactive `play` loop and the `cfg`
//! diagnostics command. The global `--session` flag overrides the
//! session file path from configuration and environment.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "noughts",
    version,
    about = "Two-player tic-tac-toe: rules engine with a scripted session harness"
)]
pub struct NoughtsCli {
    /// Path to the session file (overrides config file and NOUGHTS_SESSION)
    #[arg(long, global = true, value_name = "FILE")]
    pub session: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one move for the active player
    Move {
        /// Board row, 0 through 2
        row: usize,
        /// Board column, 0 through 2
        col: usize,
    },
    /// Print the board, players, active player, and result
    State {
        /// Emit the full session state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename a player; an empty name keeps the current one
    Rename {
        /// Player index, 0 (X) or 1 (O)
        index: usize,
        /// New display name
        name: String,
    },
    /// Clear the board for a new round, keeping names and scores
    Reset,
    /// Interactive session reading commands from stdin
    Play,
    /// Show resolved configuration values and their sources
    Cfg,
}
