//! Journal entry record

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format stored with every entry (local time, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One journal entry belonging to a single user
///
/// Entries are append-only; there is no edit operation. The `owner`
/// field is serialized as `username` in the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "username")]
    pub owner: String,
    pub title: String,
    pub content: String,
    pub timestamp: String,
}

impl Entry {
    /// Create an entry stamped with the current local time
    pub fn new(owner: &str, title: &str, content: &str) -> Self {
        Entry {
            owner: owner.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Case-insensitive substring match against title or content
    ///
    /// An empty keyword matches every entry.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.content.to_lowercase().contains(&keyword)
    }
}
