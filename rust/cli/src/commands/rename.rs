//! Rename command handler.
//!
//! Index must be 0 or 1; anything else is a usage error. An empty or
//! whitespace name is accepted and keeps the current name, matching
//! the engine's permissive set-name semantics.

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::CliError;
use crate::session::Session;

/// Handle the rename command.
pub fn handle_rename_command(
    session_path: &Path,
    config: &Config,
    index: usize,
    name: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if index > 1 {
        return Err(CliError::InvalidInput(format!(
            "Player index must be 0 or 1, got {}",
            index
        )));
    }

    let mut session = Session::load_or_new(session_path, config)?;
    session.game.set_player_name(index, name);
    session.save(session_path)?;

    writeln!(
        out,
        "Player {} name: {}",
        index + 1,
        session.game.players()[index].name()
    )?;
    Ok(())
}
