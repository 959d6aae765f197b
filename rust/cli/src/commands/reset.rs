//! Reset command handler: clear the board for a new round.
//!
//! Names and win counts persist across resets; only the board, turn
//! order, and result are reinitialized.

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::CliError;
use crate::session::Session;

/// Handle the reset command.
pub fn handle_reset_command(
    session_path: &Path,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut session = Session::load_or_new(session_path, config)?;
    session.game.reset_game();
    session.save(session_path)?;

    writeln!(out, "Game reset! Current board:")?;
    write!(out, "{}", session.game.render_board())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handle_move_command;
    use tempfile::TempDir;

    #[test]
    fn reset_clears_board_but_keeps_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let config = Config::default();
        let mut out = Vec::new();

        // Top-row win for player one
        for (r, c) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            handle_move_command(&path, &config, r, c, &mut out).unwrap();
        }

        out.clear();
        handle_reset_command(&path, &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Game reset! Current board:\n"));
        assert!(text.ends_with(". . .\n. . .\n. . .\n"));

        let session = Session::load_or_new(&path, &config).unwrap();
        assert_eq!(session.game.players()[0].wins(), 1, "wins persist");
        assert!(!session.game.is_over());
        assert_eq!(session.game.active_player().name(), "Player One");
    }
}
