//! Login use case

use crate::error::{JournError, Result};
use crate::infrastructure::AccountStore;

/// Service for checking credentials
pub struct LoginService {
    account_store: AccountStore,
}

impl LoginService {
    /// Create a new login service
    pub fn new(account_store: AccountStore) -> Self {
        LoginService { account_store }
    }

    /// Check the username/password pair
    ///
    /// The store answers with a single bool; a false answer becomes
    /// `InvalidCredentials` without saying which half was wrong. Starting
    /// the session is the caller's job.
    pub fn execute(&self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(JournError::EmptyField("username"));
        }

        if self.account_store.verify(username, password)? {
            Ok(())
        } else {
            Err(JournError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{FileSystemRepository, JournalRepository};
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> LoginService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let store = AccountStore::new(repo);
        store.create("alice", "pw1").unwrap();
        LoginService::new(store)
    }

    #[test]
    fn test_login_success() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.execute("alice", "pw1").unwrap();
    }

    #[test]
    fn test_login_wrong_password() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(matches!(
            service.execute("alice", "pw2").unwrap_err(),
            JournError::InvalidCredentials
        ));
    }

    #[test]
    fn test_login_unknown_user_same_error() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        // Unknown user and wrong password are the same error
        let unknown = service.execute("nobody", "pw1").unwrap_err();
        let wrong = service.execute("alice", "bad").unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[test]
    fn test_login_empty_username() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(matches!(
            service.execute("", "pw1").unwrap_err(),
            JournError::EmptyField("username")
        ));
    }
}
