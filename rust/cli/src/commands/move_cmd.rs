//! Move command handler: play one round for the active player.
//!
//! Loads the session, applies one placement, saves, and prints the
//! board followed by either the terminal result or the next-turn line.
//! The terminal message suppresses the next-turn line. Rejected moves
//! (occupied cell, game already over) print a message and still count
//! as a successful invocation; only out-of-range coordinates are an
//! error.

use std::io::Write;
use std::path::Path;

use noughts_engine::errors::GameError;
use noughts_engine::game::RoundOutcome;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_turn_line, rejection_message};
use crate::session::Session;

/// Handle the move command.
///
/// # Arguments
///
/// * `session_path` - Session file backing this game
/// * `config` - Resolved configuration (default names for fresh sessions)
/// * `row`, `col` - Target cell, each in `[0, 3)`
/// * `out` - Output stream for the board and result lines
///
/// # Returns
///
/// `Ok(())` for any recognized invocation, including rejected moves.
/// `CliError::InvalidInput` for out-of-range coordinates; session and
/// I/O failures propagate as their respective variants.
pub fn handle_move_command(
    session_path: &Path,
    config: &Config,
    row: usize,
    col: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut session = Session::load_or_new(session_path, config)?;

    match session.game.play_round(row, col) {
        Ok(outcome) => {
            session.save(session_path)?;
            write!(out, "{}", session.game.render_board())?;
            match outcome {
                RoundOutcome::Continued => writeln!(out, "{}", format_turn_line(&session.game))?,
                RoundOutcome::Won(_) | RoundOutcome::Draw => {
                    writeln!(out, "{}", session.game.result().unwrap_or(""))?
                }
            }
            Ok(())
        }
        Err(error @ GameError::OutOfBounds { .. }) => Err(error.into()),
        Err(rejected) => {
            writeln!(out, "{}", rejection_message(&rejected))?;
            Ok(())
        }
    }
}
