//! Credential file handling.
//!
//! jiratt reads its connection settings from a single plain-text file,
//! `.jiratt`, in the user's home directory. The file holds space-separated
//! `key value` pairs, for example:
//!
//! ```text
//! host https://jira.example.com user bob token abc123
//! ```
//!
//! Recognized keys are `host` (tracker base URL), `user` (account
//! identifier) and `token` (API credential). All three are required; the
//! order of the pairs does not matter. Anything else in key position is
//! rejected. The file is read-only input and is never written by jiratt.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

/// Credential file name, looked up inside the home directory.
pub const CREDENTIALS_FILE_NAME: &str = ".jiratt";

/// Connection settings for the Jira instance.
///
/// Built once per run from the credential file and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    /// Base URL of the tracker, e.g. `https://jira.example.com`
    pub host: String,
    /// Account identifier used for basic auth
    pub username: String,
    /// API token paired with the username
    pub token: String,
}

impl Credentials {
    /// Reads credentials from `<home>/.jiratt`.
    pub fn read() -> Result<Self> {
        Self::read_from(&home_dir()?.join(CREDENTIALS_FILE_NAME))
    }

    /// Reads credentials from an explicit path.
    ///
    /// Separated from [`Credentials::read`] so tests can point the loader
    /// at a fixture file instead of the real home directory.
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| msg_error_anyhow!(Message::CredentialsReadFailed(path.display().to_string(), e.to_string())))?;
        Self::parse(&contents)
    }

    /// Parses the space-separated `key value` pair format.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut host = None;
        let mut username = None;
        let mut token = None;

        let parts: Vec<&str> = contents.trim().split_whitespace().collect();
        for pair in parts.chunks(2) {
            let key = pair[0];
            let value = match pair.get(1) {
                Some(value) => (*value).to_string(),
                None => msg_bail_anyhow!(Message::CredentialsPropertyMissingValue(key.to_string())),
            };
            match key {
                "host" => host = Some(value),
                "user" => username = Some(value),
                "token" => token = Some(value),
                _ => msg_bail_anyhow!(Message::UnknownCredentialsProperty(key.to_string())),
            }
        }

        Ok(Self {
            host: require(host, "host")?,
            username: require(username, "user")?,
            token: require(token, "token")?,
        })
    }
}

fn require(value: Option<String>, key: &str) -> Result<String> {
    value.ok_or_else(|| msg_error_anyhow!(Message::CredentialsPropertyNotSet(key.to_string())))
}

/// Resolves the user's home directory from the environment.
fn home_dir() -> Result<PathBuf> {
    let env_var = match OS {
        "windows" => "USERPROFILE",
        _ => "HOME",
    };
    var(env_var)
        .map(PathBuf::from)
        .map_err(|e| msg_error_anyhow!(Message::HomeDirNotFound(e.to_string())))
}
