//! # noughts CLI Library
//!
//! Command-line harness around the [`noughts_engine`] rules engine.
//! One subcommand exists per engine operation; a JSON session file
//! lets separate invocations compose into a single game.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["noughts", "state"];
//! let code = noughts_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `move <row> <col>`: play one move for the active player
//! - `state [--json]`: print the board, players, active player, and result
//! - `rename <index> <name>`: rename a player
//! - `reset`: clear the board for a new round, keeping names and scores
//! - `play`: interactive session reading commands from stdin
//! - `cfg`: display resolved configuration settings

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod ui;
pub mod validation;

mod session;

use cli::{Commands, NoughtsCli};
use commands::{
    handle_cfg_command, handle_move_command, handle_play_command, handle_rename_command,
    handle_reset_command, handle_state_command,
};
pub use error::CliError;
pub use session::Session;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for every recognized invocation (rejected moves
/// included), `2` for malformed arguments or I/O failures.
///
/// # Example
///
/// ```
/// use std::io;
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = noughts_cli::run(vec!["noughts", "--help"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["move", "state", "rename", "reset", "play", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = NoughtsCli::try_parse_from(&argv);
    let cli = match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: noughts <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: noughts --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            };
        }
        Ok(cli) => cli,
    };

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return exit_code::ERROR;
        }
    };
    let session_path = cli
        .session
        .unwrap_or_else(|| PathBuf::from(&config.session));

    let result = match cli.cmd {
        Commands::Move { row, col } => handle_move_command(&session_path, &config, row, col, out),
        Commands::State { json } => handle_state_command(&session_path, &config, json, out),
        Commands::Rename { index, name } => {
            handle_rename_command(&session_path, &config, index, &name, out)
        }
        Commands::Reset => handle_reset_command(&session_path, &config, out),
        Commands::Play => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(&session_path, &config, out, err, &mut stdin_lock)
        }
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
