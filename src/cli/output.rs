//! Output formatting utilities

use crate::domain::Entry;

/// Format a numbered list of entries for display
///
/// Numbers start at 1 and match what 'journ delete' expects.
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}. {} ({})\n", i + 1, entry.title, entry.timestamp));
        for line in entry.content.lines() {
            output.push_str(&format!("   {}\n", line));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, content: &str) -> Entry {
        Entry {
            owner: "alice".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            timestamp: "2025-01-17 09:30:00".to_string(),
        }
    }

    #[test]
    fn test_format_empty_list() {
        let entries = vec![];
        let output = format_entry_list(&entries);
        assert_eq!(output, "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![entry("Day 1", "It rained."), entry("Day 2", "Sun came out.")];

        let output = format_entry_list(&entries);
        assert!(output.contains("1. Day 1 (2025-01-17 09:30:00)"));
        assert!(output.contains("   It rained."));
        assert!(output.contains("2. Day 2 (2025-01-17 09:30:00)"));
        assert!(output.contains("   Sun came out."));
    }

    #[test]
    fn test_format_numbers_start_at_one() {
        let entries = vec![entry("Only", "text")];
        let output = format_entry_list(&entries);
        assert!(output.starts_with("1. "));
    }

    #[test]
    fn test_format_multiline_content_indented() {
        let entries = vec![entry("Day 1", "line one\nline two")];

        let output = format_entry_list(&entries);
        assert!(output.contains("   line one\n"));
        assert!(output.contains("   line two\n"));
    }

    #[test]
    fn test_format_entries_separated_by_blank_line() {
        let entries = vec![entry("Day 1", "a"), entry("Day 2", "b")];

        let output = format_entry_list(&entries);
        assert!(output.contains("   a\n\n2. Day 2"));
    }
}
