//! Session persistence for the one-shot subcommands.
//!
//! The engine itself knows nothing of files; the harness keeps one
//! [`GameController`] per session file (JSON) so that separate
//! `noughts move` invocations compose into a single game. A missing
//! file means a fresh session built from configured player names. An
//! RFC3339 `updated` timestamp is injected on every save.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use noughts_engine::game::GameController;

use crate::config::Config;
use crate::error::CliError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Session {
    pub game: GameController,
    /// Last save time, RFC3339. Absent until the first save.
    #[serde(default)]
    pub updated: Option<String>,
}

impl Session {
    /// Fresh session with the configured default player names.
    pub fn new(config: &Config) -> Self {
        Self {
            game: GameController::with_names(&config.player_one, &config.player_two),
            updated: None,
        }
    }

    /// Load the session at `path`, or start a fresh one if the file
    /// does not exist. A present-but-unreadable file is an error, not
    /// a silent restart.
    pub fn load_or_new(path: &Path, config: &Config) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::new(config));
        }
        let text = fs::read_to_string(path)?;
        let session = serde_json::from_str(&text)
            .map_err(|e| CliError::Session(format!("{}: {}", path.display(), e)))?;
        Ok(session)
    }

    /// Write the session to `path`, creating parent directories as
    /// needed and stamping `updated`.
    pub fn save(&mut self, path: &Path) -> Result<(), CliError> {
        self.updated = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
