//! File system repository

use crate::error::{JournError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .journ/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .journ/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .journ directory exists
    fn is_initialized(&self) -> bool;

    /// Create .journ directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks JOURN_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check JOURN_ROOT environment variable first
        if let Ok(root_path) = std::env::var("JOURN_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journ_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(JournError::Config(format!(
                    "JOURN_ROOT is set to '{}' but no .journ directory found. \
                    Run 'journ init' in that directory or unset JOURN_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journ_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .journ
                    return Err(JournError::NotJournDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .journ directory
    fn has_journ_dir(path: &Path) -> bool {
        path.join(".journ").is_dir()
    }

    /// The .journ directory holding config, stores, and session
    pub fn journ_dir(&self) -> PathBuf {
        self.root.join(".journ")
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journ_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journ_dir = self.journ_dir();

        if journ_dir.exists() {
            return Err(JournError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journ_dir)?;
        Ok(())
    }
}

// Store file primitives (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Read a file under .journ, or None if it does not exist yet
    pub fn read_store_file(&self, filename: &str) -> Result<Option<String>> {
        let path = self.journ_dir().join(filename);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path).map(Some).map_err(JournError::Io)
    }

    /// Replace a file under .journ using a temp-file-then-rename so a
    /// concurrent reader never observes a partially written store.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    pub fn write_store_file_atomic(&self, filename: &str, contents: &str) -> Result<()> {
        let journ_dir = self.journ_dir();
        if !journ_dir.is_dir() {
            return Err(JournError::NotJournDirectory(self.root.clone()));
        }

        let path = journ_dir.join(filename);
        let tmp_path = journ_dir.join(format!("{}.journ-tmp-{}", filename, std::process::id()));

        let write_err = |source: std::io::Error| JournError::StorageWrite {
            path: path.clone(),
            source,
        };

        fs::write(&tmp_path, contents).map_err(write_err)?;

        if path.exists() {
            fs::remove_file(&path).map_err(write_err)?;
        }

        fs::rename(&tmp_path, &path).map_err(write_err)?;
        Ok(())
    }

    /// Remove a file under .journ (no-op if absent)
    pub fn remove_store_file(&self, filename: &str) -> Result<()> {
        let path = self.journ_dir().join(filename);

        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
