//! Extraction session: selected document, stop-word set, current tag map.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::TagError;
use crate::report;
use crate::stopwords::StopWordSet;
use crate::tags::{self, TagMap};

/// State carried across operations, passed explicitly instead of living in
/// presentation-layer fields. Every operation either commits a full
/// replacement of the piece it owns or fails and leaves it as it was.
#[derive(Debug, Default)]
pub struct Session {
    document: Option<PathBuf>,
    stop_words: StopWordSet,
    tags: TagMap,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the document to extract from. The file is read at extraction
    /// time, not here.
    pub fn load_document(&mut self, path: &Path) {
        info!(document = %path.display(), "document selected");
        self.document = Some(path.to_path_buf());
    }

    /// Replace the stop-word set from a file. On failure the current set
    /// stays in effect.
    pub fn load_stop_words(&mut self, path: &Path) -> Result<(), TagError> {
        let set = StopWordSet::load(path)?;
        info!(words = set.len(), "stop words loaded");
        self.stop_words = set;
        Ok(())
    }

    /// Rebuild the tag map from the selected document, discarding the
    /// previous map. If the document cannot be read, the previous map is
    /// kept.
    pub fn extract(&mut self) -> Result<&TagMap, TagError> {
        let document = self.document.clone().ok_or(TagError::NoDocument)?;
        let tags = tags::extract_from_file(&document, &self.stop_words)?;
        info!(tags = tags.len(), "tags extracted");
        self.tags = tags;
        Ok(&self.tags)
    }

    /// Display string for the current tag map.
    pub fn format_tags(&self) -> String {
        report::format_table(&self.tags)
    }

    /// Export the current tag map as CSV. Rejected while the map is empty.
    pub fn save(&self, path: &Path) -> Result<(), TagError> {
        if self.tags.is_empty() {
            return Err(TagError::NoTags);
        }
        report::save_csv(&self.tags, path)?;
        info!(output = %path.display(), "tags saved");
        Ok(())
    }

    pub fn document(&self) -> Option<&Path> {
        self.document.as_deref()
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }
}
