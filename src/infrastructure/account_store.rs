//! Account store - username to password-digest mapping
//!
//! Backed by `.journ/accounts.json`, a single JSON object. Every
//! operation re-reads the whole file so that one process always sees
//! what another finished writing; there is no cache between calls.

use crate::domain::hash_password;
use crate::error::{JournError, Result};
use crate::infrastructure::FileSystemRepository;
use std::collections::BTreeMap;

/// File name of the account store under .journ
pub const ACCOUNTS_FILE: &str = "accounts.json";

/// Durable mapping from username to SHA-256 password digest
#[derive(Debug, Clone)]
pub struct AccountStore {
    repository: FileSystemRepository,
}

impl AccountStore {
    /// Create an account store over the given repository
    pub fn new(repository: FileSystemRepository) -> Self {
        AccountStore { repository }
    }

    /// Load the full username -> digest mapping
    ///
    /// A missing store file means no accounts yet and yields an empty map.
    pub fn load(&self) -> Result<BTreeMap<String, String>> {
        match self.repository.read_store_file(ACCOUNTS_FILE)? {
            None => Ok(BTreeMap::new()),
            Some(contents) => {
                serde_json::from_str(&contents).map_err(|e| JournError::StorageCorrupt {
                    path: self.repository.journ_dir().join(ACCOUNTS_FILE),
                    source: e,
                })
            }
        }
    }

    /// Persist the full mapping, replacing the store file atomically
    pub fn save(&self, accounts: &BTreeMap<String, String>) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(accounts).map_err(|e| JournError::StorageWrite {
                path: self.repository.journ_dir().join(ACCOUNTS_FILE),
                source: std::io::Error::other(e),
            })?;
        self.repository
            .write_store_file_atomic(ACCOUNTS_FILE, &contents)
    }

    /// Register a new account, rejecting duplicates
    ///
    /// Usernames are case-sensitive: `Alice` and `alice` are distinct.
    pub fn create(&self, username: &str, password: &str) -> Result<()> {
        let mut accounts = self.load()?;

        if accounts.contains_key(username) {
            return Err(JournError::DuplicateUsername(username.to_string()));
        }

        accounts.insert(username.to_string(), hash_password(password));
        self.save(&accounts)
    }

    /// Check a username/password pair against the stored digest
    ///
    /// Returns a single bool: an unknown username and a wrong password
    /// are indistinguishable to the caller.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let accounts = self.load()?;

        Ok(accounts
            .get(username)
            .is_some_and(|digest| *digest == hash_password(password)))
    }

    /// Remove an account (no-op if absent)
    ///
    /// Removing the owner's entries is the caller's responsibility; the
    /// two stores are independent.
    pub fn delete(&self, username: &str) -> Result<()> {
        let mut accounts = self.load()?;
        accounts.remove(username);
        self.save(&accounts)
    }
}
