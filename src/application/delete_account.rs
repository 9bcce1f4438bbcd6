//! Cascading account deletion use case

use crate::error::Result;
use crate::infrastructure::{AccountStore, EntryStore};

/// Service for deleting an account together with all its entries
pub struct DeleteAccountService {
    account_store: AccountStore,
    entry_store: EntryStore,
}

impl DeleteAccountService {
    /// Create a new delete-account service
    pub fn new(account_store: AccountStore, entry_store: EntryStore) -> Self {
        DeleteAccountService {
            account_store,
            entry_store,
        }
    }

    /// Remove the user's entries, then the account
    ///
    /// Entries go first: if the second step never runs, the account still
    /// exists with no entries, which is an ordinary state. Orphaned
    /// entries after a removed account would not be reachable again.
    pub fn execute(&self, username: &str) -> Result<()> {
        self.entry_store.delete_all_for(username)?;
        self.account_store.delete(username)
    }
}
