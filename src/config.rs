//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CAMERAS_FILE: &str = "cameras.yaml";

/// Which registered cameras are active when the server starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialActive {
    All,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub cameras_file: PathBuf,
    pub initial_active: InitialActive,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("unknown CAMERAS_ACTIVE: {0} (expected 'all' or 'none')")]
    UnknownInitialActive(String),
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CAMERAS_FILE`: default `cameras.yaml`
    /// - `CAMERAS_ACTIVE`: `all` (default) or `none`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let cameras_file = std::env::var("CAMERAS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CAMERAS_FILE));
        let initial_active = parse_initial_active(std::env::var("CAMERAS_ACTIVE").ok().as_deref())?;

        Ok(Self { port, cameras_file, initial_active })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_initial_active(raw: Option<&str>) -> Result<InitialActive, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "all") => Ok(InitialActive::All),
        Some("none") => Ok(InitialActive::None),
        Some(other) => Err(ConfigError::UnknownInitialActive(other.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
