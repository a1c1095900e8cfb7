//! Operation errors: file access failures and empty-result guards.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced at the operation boundaries (load, extract, save).
/// All of them are recoverable: the user retries with corrected input.
#[derive(Error, Debug)]
pub enum TagError {
    /// A file could not be opened, read, or written.
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Extraction was requested before a document was selected.
    #[error("select a document first")]
    NoDocument,

    /// Save was requested while the tag map is empty.
    #[error("no tags to save")]
    NoTags,
}

impl TagError {
    /// Wrap an I/O error with the path it happened on.
    pub fn file_access(path: &Path, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}
