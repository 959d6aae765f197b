//! Play command handler: interactive session on stdin.
//!
//! Reads one command per line (`<row> <col>`, `state`, `reset`,
//! `rename <index> <name>`, `q`/`quit`), applies it to the session
//! game, and re-renders after every action. The loop ends on quit or
//! end of input, and the session is saved on the way out, so a game
//! started interactively can be continued with the one-shot
//! subcommands and vice versa.

use std::io::{BufRead, Write};
use std::path::Path;

use noughts_engine::errors::GameError;
use noughts_engine::game::{GameController, RoundOutcome};

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_state, format_turn_line, rejection_message};
use crate::session::Session;
use crate::ui;
use crate::validation::{parse_play_input, ParseResult, PlayAction};

/// Handle the play command.
///
/// # Arguments
///
/// * `session_path` - Session file to resume and save
/// * `config` - Resolved configuration (default names for fresh sessions)
/// * `out` - Output stream for boards, prompts, and results
/// * `err` - Output stream for warnings about unrecognized input
/// * `input` - Line source for player commands (stdin in production)
pub fn handle_play_command(
    session_path: &Path,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut session = Session::load_or_new(session_path, config)?;

    write!(out, "{}", session.game.render_board())?;
    announce(&session.game, out)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_play_input(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(message) => ui::display_warning(err, &message)?,
            ParseResult::Action(action) => apply_action(&mut session.game, action, out, err)?,
        }
    }

    session.save(session_path)?;
    Ok(())
}

/// Print the terminal result when one exists, the next-turn line
/// otherwise. The terminal message suppresses the turn line.
fn announce(game: &GameController, out: &mut dyn Write) -> Result<(), CliError> {
    if let Some(result) = game.result() {
        writeln!(out, "{}", result)?;
    } else {
        writeln!(out, "{}", format_turn_line(game))?;
    }
    Ok(())
}

fn apply_action(
    game: &mut GameController,
    action: PlayAction,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match action {
        PlayAction::Move { row, col } => match game.play_round(row, col) {
            Ok(RoundOutcome::Continued) | Ok(RoundOutcome::Won(_)) | Ok(RoundOutcome::Draw) => {
                write!(out, "{}", game.render_board())?;
                announce(game, out)?;
            }
            Err(error @ GameError::OutOfBounds { .. }) => {
                ui::display_warning(err, &error.to_string())?;
            }
            Err(rejected) => {
                writeln!(out, "{}", rejection_message(&rejected))?;
            }
        },
        PlayAction::State => {
            write!(out, "{}", format_state(game))?;
        }
        PlayAction::Reset => {
            game.reset_game();
            writeln!(out, "Game reset! Current board:")?;
            write!(out, "{}", game.render_board())?;
            announce(game, out)?;
        }
        PlayAction::Rename { index, name } => {
            if index > 1 {
                ui::display_warning(err, "Player index must be 0 or 1.")?;
            } else {
                game.set_player_name(index, &name);
                writeln!(out, "Player {} name: {}", index + 1, game.players()[index].name())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(script: &str) -> (String, String, Session) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let config = Config::default();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(script.to_string());

        handle_play_command(&path, &config, &mut out, &mut err, &mut input).unwrap();
        let session = Session::load_or_new(&path, &config).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            session,
        )
    }

    #[test]
    fn opens_with_board_and_turn_line() {
        let (out, _err, _session) = run_script("q\n");
        assert!(out.starts_with(". . .\n. . .\n. . .\nPlayer One's turn.\n"));
    }

    #[test]
    fn plays_a_full_winning_game() {
        let script = "0 0\n1 1\n0 1\n1 0\n0 2\nq\n";
        let (out, err, session) = run_script(script);

        assert!(out.contains("Player One wins!"));
        assert!(err.is_empty());
        assert!(session.game.is_over());
        assert_eq!(session.game.players()[0].wins(), 1);
    }

    #[test]
    fn occupied_cell_message_appears_inline() {
        let (out, _err, session) = run_script("0 0\n0 0\nq\n");
        assert!(out.contains("This spot is taken."));
        assert_eq!(session.game.active_player().name(), "Player Two");
    }

    #[test]
    fn invalid_input_warns_on_stderr_and_continues() {
        let (_out, err, session) = run_script("sideways\n0 0\nq\n");
        assert!(err.starts_with("WARNING:"));
        assert_eq!(session.game.snapshot()[0][0].map(|m| m.to_string()), Some("X".into()));
    }

    #[test]
    fn reset_and_rename_work_inside_the_loop() {
        let script = "rename 0 Ada\n0 0\nreset\nstate\nq\n";
        let (out, _err, session) = run_script(script);

        assert!(out.contains("Player 1 name: Ada"));
        assert!(out.contains("Game reset! Current board:"));
        assert_eq!(session.game.players()[0].name(), "Ada");
        assert_eq!(session.game.snapshot(), GameController::new().snapshot());
    }

    #[test]
    fn end_of_input_saves_and_exits_cleanly() {
        let (_out, _err, session) = run_script("1 1\n");
        assert!(session.updated.is_some());
        assert_eq!(session.game.active_player().name(), "Player Two");
    }
}
