// ABOUTME: Configuration types and parsing for scmssh.yml.
// ABOUTME: Handles YAML parsing, env var indirection, and prompt fallback.

mod prompt;
mod secret;

pub use secret::SecretValue;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "scmssh.yml";
pub const CONFIG_FILENAME_ALT: &str = "scmssh.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".scmssh/config.yml";

/// On-disk configuration. Every credential field is optional; missing
/// fields are filled in interactively by [`Settings::resolve`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub realm: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<SecretValue>,

    #[serde(default)]
    pub ssh: SshOptions,
}

/// Options passed through to the OS OpenSSH client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SshOptions {
    /// Login user on the appliance.
    pub user: String,

    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,

    #[serde(with = "humantime_serde")]
    pub keepalive: Duration,
}

impl Default for SshOptions {
    fn default() -> Self {
        Self {
            user: "root".to_string(),
            connect_timeout: Duration::from_secs(3),
            keepalive: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look for a config file in the given directory. Absence is not an
    /// error; the caller falls back to interactive prompting.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path).map(Some);
            }
        }

        Ok(None)
    }
}

/// Fully-resolved settings: realm, credentials, and SSH options.
#[derive(Debug, Clone)]
pub struct Settings {
    pub realm: String,
    pub username: String,
    pub password: String,
    pub ssh: SshOptions,
}

impl Settings {
    /// Resolve settings from an optional config file, prompting on stdin
    /// for each missing field. With a complete config file no prompt is
    /// issued; with no file at all, every credential is prompted for.
    pub fn resolve(config: Option<Config>) -> Result<Self> {
        if config.is_none() {
            println!("No {CONFIG_FILENAME} found, please enter SCM details:");
        }
        let config = config.unwrap_or_default();

        let realm = match config.realm {
            Some(realm) => realm,
            None => prompt::read_line("SCM realm (e.g. example.riverbed.cc): ")?,
        };
        let realm = realm.trim().to_string();
        if realm.is_empty() {
            return Err(Error::InvalidConfig("realm cannot be empty".to_string()));
        }

        let username = match config.username {
            Some(username) => username,
            None => prompt::read_line("SCM username: ")?,
        };

        let password = match config.password {
            Some(secret) => secret.resolve()?,
            None => prompt::read_password("SCM password: ")?,
        };

        Ok(Self {
            realm,
            username,
            password,
            ssh: config.ssh,
        })
    }
}
