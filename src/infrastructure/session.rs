//! Login session file
//!
//! The stores know nothing about who is logged in; the session is a
//! small TOML file owned by the CLI layer. Present means logged in,
//! absent means logged out.

use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File name of the session file under .journ
pub const SESSION_FILE: &str = "session.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub started: DateTime<Utc>,
}

impl Session {
    /// Start a session for the given user, stamped now
    pub fn start(username: &str) -> Self {
        Session {
            username: username.to_string(),
            started: Utc::now(),
        }
    }

    /// Load the current session, or None when logged out
    pub fn load(repository: &FileSystemRepository) -> Result<Option<Self>> {
        match repository.read_store_file(SESSION_FILE)? {
            None => Ok(None),
            Some(contents) => Ok(Some(toml::from_str(&contents)?)),
        }
    }

    /// Persist this session
    pub fn save(&self, repository: &FileSystemRepository) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        repository.write_store_file_atomic(SESSION_FILE, &contents)
    }

    /// End any current session (no-op when logged out)
    pub fn clear(repository: &FileSystemRepository) -> Result<()> {
        repository.remove_store_file(SESSION_FILE)
    }
}
