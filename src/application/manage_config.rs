//! Config management use case

use crate::error::{JournError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            _ => Err(JournError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(JournError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JournError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_editor() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let editor = service.get("editor").unwrap();
        assert!(!editor.is_empty());
    }

    #[test]
    fn test_set_editor() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("editor", "vim").unwrap();
        assert_eq!(service.get("editor").unwrap(), "vim");
    }

    #[test]
    fn test_set_created_rejected() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("created", "2025-01-01").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.get("mode").is_err());
        assert!(service.set("mode", "daily").is_err());
    }
}
