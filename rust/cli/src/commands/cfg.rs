//! Cfg command handler: show resolved configuration.
//!
//! Each value is printed with the source it was resolved from
//! (default, config file, or environment variable).

use std::io::Write;

use crate::config;
use crate::error::CliError;

/// Handle the cfg command.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(out, "player_one = \"{}\" ({})", cfg.player_one, sources.player_one.label())?;
    writeln!(out, "player_two = \"{}\" ({})", cfg.player_two, sources.player_two.label())?;
    writeln!(out, "session = \"{}\" ({})", cfg.session, sources.session.label())?;
    Ok(())
}
