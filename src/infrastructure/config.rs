//! Configuration management

use crate::error::{JournError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Load config from .journ/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".journ").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JournError::NotJournDirectory(path.to_path_buf())
            } else {
                JournError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| JournError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .journ/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journ_dir = path.join(".journ");
        let config_path = journ_dir.join("config.toml");

        // Ensure .journ directory exists
        if !journ_dir.exists() {
            fs::create_dir(&journ_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JournError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
