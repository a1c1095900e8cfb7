//! Stop-word list: one word per line, trimmed, lowercased, deduplicated.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::TagError;

/// Words excluded from tagging. The empty set is valid and filters nothing.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Load a stop-word list from a file. Returns a fresh set, so a failed
    /// load leaves whatever set the caller currently holds untouched.
    pub fn load(path: &Path) -> Result<Self, TagError> {
        let text =
            fs::read_to_string(path).map_err(|source| TagError::file_access(path, source))?;
        Ok(Self::from_lines(text.lines()))
    }

    /// Build a set from raw lines: trim, lowercase, skip blanks.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let words = lines
            .into_iter()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Membership test against a normalized token.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
