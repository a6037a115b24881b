//! Tag reading trait definitions and data structures

use std::io;
use std::path::Path;
use thiserror::Error;

/// Tag reader trait - allows swapping the ID3 implementation for test doubles
pub trait TagReader {
    /// Probe a file for an embedded tag container
    ///
    /// Returns `Ok(TagOutcome::NoContainer)` when the file carries no tag
    /// structure at all; that case is not an error, callers apply filename
    /// fallbacks instead.
    fn read_tags(&self, path: &Path) -> Result<TagOutcome, TagReadError>;
}

/// Result of probing a file for embedded tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    /// No tag container present in the file
    NoContainer,

    /// A tag container is present; individual fields may still be absent
    Container(TagFields),
}

/// Tag fields the manifest cares about
///
/// `None` means the frame is absent; blank values are kept verbatim and
/// filtered by the resolution policy, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFields {
    /// Title frame (TIT2 for ID3)
    pub title: Option<String>,

    /// Artist frame (TPE1 for ID3)
    pub artist: Option<String>,
}

/// Unrecoverable tag extraction failure
#[derive(Debug, Error)]
pub enum TagReadError {
    /// The file could not be opened or read
    #[error("failed to read audio file: {0}")]
    Io(#[from] io::Error),

    /// Tag structure present but unreadable
    #[error("malformed tag data: {0}")]
    Malformed(String),
}
