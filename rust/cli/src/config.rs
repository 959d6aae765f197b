//! Configuration loading with file and environment precedence.
//!
//! Values resolve in order: built-in defaults, then the TOML config
//! file (`NOUGHTS_CONFIG` path, falling back to `noughts.toml` in the
//! working directory), then environment variables. Each resolved value
//! remembers its source so the `cfg` command can report where a
//! setting came from.

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default name for player one (marker X) in fresh sessions
    pub player_one: String,
    /// Default name for player two (marker O) in fresh sessions
    pub player_two: String,
    /// Session file path used when `--session` is not given
    pub session: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_one: "Player One".into(),
            player_two: "Player Two".into(),
            session: "noughts-session.json".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub player_one: ValueSource,
    pub player_two: ValueSource,
    pub session: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            player_one: ValueSource::Default,
            player_two: ValueSource::Default,
            session: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O: {}", e),
            ConfigError::Parse(e) => write!(f, "config file parse: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Optional-field mirror of [`Config`] for partial TOML files.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    player_one: Option<String>,
    player_two: Option<String>,
    session: Option<String>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut config = Config::default();
    let mut sources = ConfigSources::default();

    let path = std::env::var("NOUGHTS_CONFIG").unwrap_or_else(|_| "noughts.toml".to_string());
    if fs::metadata(&path).is_ok() {
        let text = fs::read_to_string(&path)?;
        let file: FileConfig = toml::from_str(&text)?;
        if let Some(v) = file.player_one {
            config.player_one = v;
            sources.player_one = ValueSource::File;
        }
        if let Some(v) = file.player_two {
            config.player_two = v;
            sources.player_two = ValueSource::File;
        }
        if let Some(v) = file.session {
            config.session = v;
            sources.session = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("NOUGHTS_PLAYER_ONE") {
        if !v.is_empty() {
            config.player_one = v;
            sources.player_one = ValueSource::Env;
        }
    }
    if let Ok(v) = std::env::var("NOUGHTS_PLAYER_TWO") {
        if !v.is_empty() {
            config.player_two = v;
            sources.player_two = ValueSource::Env;
        }
    }
    if let Ok(v) = std::env::var("NOUGHTS_SESSION") {
        if !v.is_empty() {
            config.session = v;
            sources.session = ValueSource::Env;
        }
    }

    Ok(ConfigResolved { config, sources })
}

impl ValueSource {
    pub fn label(self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
            ValueSource::Env => "env",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_defaults() {
        let config = Config::default();
        assert_eq!(config.player_one, "Player One");
        assert_eq!(config.player_two, "Player Two");
        assert_eq!(config.session, "noughts-session.json");
    }

    #[test]
    fn partial_file_config_deserializes() {
        let file: FileConfig = toml::from_str("player_one = \"Ada\"").unwrap();
        assert_eq!(file.player_one.as_deref(), Some("Ada"));
        assert!(file.player_two.is_none());
        assert!(file.session.is_none());
    }

    #[test]
    fn value_source_labels() {
        assert_eq!(ValueSource::Default.label(), "default");
        assert_eq!(ValueSource::File.label(), "file");
        assert_eq!(ValueSource::Env.label(), "env");
    }
}
