//! Error types for journ

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the journ application
#[derive(Debug, Error)]
pub enum JournError {
    #[error("Not a journ directory: {0}")]
    NotJournDirectory(PathBuf),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("No entry at position {position} (you have {len})")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Corrupt store file {path}: {source}")]
    StorageCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write store file {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournError::NotJournDirectory(_) => 2,
            JournError::InvalidCredentials => 3,
            JournError::NotLoggedIn => 4,
            JournError::DuplicateUsername(_) => 5,
            JournError::IndexOutOfRange { .. } => 6,
            JournError::EmptyField(_) | JournError::PasswordMismatch => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournError::NotJournDirectory(path) => {
                format!(
                    "Not a journ directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'journ init' in this directory to create a new journal\n\
                    • Navigate to an existing journ directory\n\
                    • Set JOURN_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JournError::NotLoggedIn => {
                "Not logged in\n\n\
                Suggestions:\n\
                • Log in with: journ login <username>\n\
                • Create an account with: journ signup <username>"
                    .to_string()
            }
            JournError::DuplicateUsername(name) => {
                format!(
                    "Username already exists: {}\n\n\
                    Suggestions:\n\
                    • Pick a different username (usernames are case-sensitive)\n\
                    • Log in instead: journ login {}",
                    name, name
                )
            }
            JournError::IndexOutOfRange { position, len } => {
                format!(
                    "No entry at position {} (you have {})\n\n\
                    Suggestions:\n\
                    • Run 'journ list' to see current entry numbers\n\
                    • The list may have changed since you last viewed it",
                    position, len
                )
            }
            JournError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: journ config editor 'vim'\n\
                    • Pass content inline instead: journ add <title> --message '...'",
                    msg
                )
            }
            JournError::StorageCorrupt { path, .. } => {
                format!(
                    "Corrupt store file: {}\n\n\
                    The file is not valid JSON of the expected shape. Journ will\n\
                    not overwrite it. Repair or remove the file, then retry.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournError
pub type Result<T> = std::result::Result<T, JournError>;
