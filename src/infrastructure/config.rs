//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_CHARACTER_URL: &str =
    "https://raw.githubusercontent.com/genshinsim/gcsim/main/pkg/shortcut/characters.go";
const DEFAULT_WEAPON_URL: &str =
    "https://raw.githubusercontent.com/genshinsim/gcsim/main/pkg/shortcut/weapons.go";
const DEFAULT_COMPLETION_MARKER: &str = "Simulation completed";

#[cfg(windows)]
const SIMULATOR_FILE_NAME: &str = "gcsim.exe";
#[cfg(not(windows))]
const SIMULATOR_FILE_NAME: &str = "gcsim";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// gcsim executable
    pub simulator_path: PathBuf,
    /// Line fragment gcsim prints when a run has finished
    pub completion_marker: String,

    /// Source of the character shortcut table
    pub character_url: String,
    /// Source of the weapon shortcut table
    pub weapon_url: String,
    /// Whole-request timeout for each shortcut fetch
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let simulator_path = match env::var_os("BATCHSIM_SIMULATOR") {
            Some(path) => PathBuf::from(path),
            None => env::current_dir()
                .context("could not determine the working directory")?
                .join(SIMULATOR_FILE_NAME),
        };

        Ok(Self {
            simulator_path,
            completion_marker: env::var("BATCHSIM_COMPLETION_MARKER")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MARKER.to_string()),

            character_url: env::var("BATCHSIM_CHARACTER_URL")
                .unwrap_or_else(|_| DEFAULT_CHARACTER_URL.to_string()),
            weapon_url: env::var("BATCHSIM_WEAPON_URL")
                .unwrap_or_else(|_| DEFAULT_WEAPON_URL.to_string()),
            http_timeout: Duration::from_secs(
                env::var("BATCHSIM_HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("BATCHSIM_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}
