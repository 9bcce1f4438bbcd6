//! Entry management use cases

use crate::domain::Entry;
use crate::error::{JournError, Result};
use crate::infrastructure::EntryStore;

/// Service for adding, listing, searching, and deleting a user's entries
pub struct EntryService {
    entry_store: EntryStore,
}

impl EntryService {
    /// Create a new entry service
    pub fn new(entry_store: EntryStore) -> Self {
        EntryService { entry_store }
    }

    /// Validate and append a new entry for `owner`
    ///
    /// The emptiness checks live here so the store stays a pure
    /// persistence primitive.
    pub fn add(&self, owner: &str, title: &str, content: &str) -> Result<Entry> {
        if title.trim().is_empty() {
            return Err(JournError::EmptyField("title"));
        }
        if content.trim().is_empty() {
            return Err(JournError::EmptyField("content"));
        }

        self.entry_store.append(owner, title, content)
    }

    /// All of `owner`'s entries in the order they were written
    pub fn list(&self, owner: &str) -> Result<Vec<Entry>> {
        self.entry_store.list_for(owner)
    }

    /// Owner's entries matching `keyword` (case-insensitive, title or content)
    pub fn search(&self, owner: &str, keyword: &str) -> Result<Vec<Entry>> {
        self.entry_store.search_for(owner, keyword)
    }

    /// Delete by zero-based position within the owner's own list
    pub fn delete(&self, owner: &str, position: usize) -> Result<()> {
        self.entry_store.delete_at(owner, position)
    }
}
