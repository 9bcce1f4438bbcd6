//! Entry store - the ordered collection of all journal entries
//!
//! Backed by `.journ/entries.json`, a single JSON array in insertion
//! order. All entries of all users live in one file; owner-scoped views
//! are the only way entries leave this module. Like the account store,
//! every operation re-reads the whole file.

use crate::domain::Entry;
use crate::error::{JournError, Result};
use crate::infrastructure::FileSystemRepository;

/// File name of the entry store under .journ
pub const ENTRIES_FILE: &str = "entries.json";

/// Durable append-only list of entries, scoped by owner on read
#[derive(Debug, Clone)]
pub struct EntryStore {
    repository: FileSystemRepository,
}

impl EntryStore {
    /// Create an entry store over the given repository
    pub fn new(repository: FileSystemRepository) -> Self {
        EntryStore { repository }
    }

    /// Load the full entry list in insertion order
    ///
    /// A missing store file means no entries yet and yields an empty vec.
    pub fn load(&self) -> Result<Vec<Entry>> {
        match self.repository.read_store_file(ENTRIES_FILE)? {
            None => Ok(Vec::new()),
            Some(contents) => {
                serde_json::from_str(&contents).map_err(|e| JournError::StorageCorrupt {
                    path: self.repository.journ_dir().join(ENTRIES_FILE),
                    source: e,
                })
            }
        }
    }

    /// Persist the full entry list, replacing the store file atomically
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(entries).map_err(|e| JournError::StorageWrite {
                path: self.repository.journ_dir().join(ENTRIES_FILE),
                source: std::io::Error::other(e),
            })?;
        self.repository
            .write_store_file_atomic(ENTRIES_FILE, &contents)
    }

    /// Append a new entry stamped with the current local time
    ///
    /// Emptiness of title/content is the caller's concern; the store is a
    /// persistence primitive and does not re-validate.
    pub fn append(&self, owner: &str, title: &str, content: &str) -> Result<Entry> {
        let mut entries = self.load()?;
        let entry = Entry::new(owner, title, content);

        entries.push(entry.clone());
        self.save(&entries)?;

        Ok(entry)
    }

    /// All entries belonging to `owner`, in insertion order
    ///
    /// This is the only exposure path; entries of other users never
    /// appear in the result.
    pub fn list_for(&self, owner: &str) -> Result<Vec<Entry>> {
        let entries = self.load()?;
        Ok(entries.into_iter().filter(|e| e.owner == owner).collect())
    }

    /// Owner's entries whose title or content contains `keyword`
    /// (case-insensitive), in insertion order
    ///
    /// An empty keyword matches every entry of the owner.
    pub fn search_for(&self, owner: &str, keyword: &str) -> Result<Vec<Entry>> {
        Ok(self
            .list_for(owner)?
            .into_iter()
            .filter(|e| e.matches_keyword(keyword))
            .collect())
    }

    /// Delete the entry at `position` within the owner-scoped list
    ///
    /// `position` indexes the subsequence returned by `list_for(owner)`,
    /// not the full store. Out of range fails without touching the file.
    pub fn delete_at(&self, owner: &str, position: usize) -> Result<()> {
        let mut entries = self.load()?;

        // Translate the owner-scoped position back to the full list
        let full_indices: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.owner == owner)
            .map(|(i, _)| i)
            .collect();

        let Some(&full_index) = full_indices.get(position) else {
            return Err(JournError::IndexOutOfRange {
                position,
                len: full_indices.len(),
            });
        };

        entries.remove(full_index);
        self.save(&entries)
    }

    /// Delete every entry belonging to `owner`
    ///
    /// Used by cascading account deletion; other owners are untouched.
    pub fn delete_all_for(&self, owner: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.retain(|e| e.owner != owner);
        self.save(&entries)
    }
}
