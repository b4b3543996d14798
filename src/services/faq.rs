//! FAQ matching service
//!
//! A fixed keyword table scanned in order: the first entry with any keyword
//! appearing as a substring of the lowercased input wins. Matching is by
//! substring, so "when" also triggers inside "whenever".

use crate::config::FaqEntry;

/// Keyword-to-response lookup over incoming text
#[derive(Debug, Clone)]
pub struct FaqMatcher {
    entries: Vec<FaqEntry>,
}

impl FaqMatcher {
    /// Build the matcher from the configured table, normalizing keywords
    /// to lowercase once up front
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut entry| {
                for keyword in &mut entry.keywords {
                    *keyword = keyword.to_lowercase();
                }
                entry
            })
            .collect();

        Self { entries }
    }

    /// Response of the first matching entry, table order
    pub fn match_text(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();

        self.entries
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map(|entry| entry.response.as_str())
    }
}
