//! State command handler: report the current session to the caller.
//!
//! The plain form prints the grid, the player list, the active player,
//! the game-over flag, and the result line once one exists. `--json`
//! emits the serialized session instead, for scripted consumers.

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_state;
use crate::session::Session;

/// Handle the state command. Read-only: the session file is not
/// created or touched.
pub fn handle_state_command(
    session_path: &Path,
    config: &Config,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let session = Session::load_or_new(session_path, config)?;
    if json {
        let text = serde_json::to_string_pretty(&session)?;
        writeln!(out, "{}", text)?;
    } else {
        write!(out, "{}", format_state(&session.game))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fresh_session_reports_empty_board() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut out = Vec::new();

        handle_state_command(&path, &Config::default(), false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(". . .\n. . .\n. . .\n"));
        assert!(text.contains("Active: Player One (X): 0 wins\n"));
        assert!(!path.exists(), "state must not create a session file");
    }

    #[test]
    fn json_output_round_trips_through_serde() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut out = Vec::new();

        handle_state_command(&path, &Config::default(), true, &mut out).unwrap();

        let session: Session = serde_json::from_slice(&out).unwrap();
        assert_eq!(session.game.players()[0].name(), "Player One");
        assert!(!session.game.is_over());
    }
}
