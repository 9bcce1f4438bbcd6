//! Sign-up use case

use crate::error::{JournError, Result};
use crate::infrastructure::AccountStore;

/// Service for creating accounts
pub struct SignupService {
    account_store: AccountStore,
}

impl SignupService {
    /// Create a new signup service
    pub fn new(account_store: AccountStore) -> Self {
        SignupService { account_store }
    }

    /// Validate input and register the account
    ///
    /// Blank fields and a failed confirmation are rejected before the
    /// store is touched; the store itself only rejects duplicates.
    pub fn execute(&self, username: &str, password: &str, confirm: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(JournError::EmptyField("username"));
        }
        if password.is_empty() {
            return Err(JournError::EmptyField("password"));
        }
        if password != confirm {
            return Err(JournError::PasswordMismatch);
        }

        self.account_store.create(username, password)
    }
}
