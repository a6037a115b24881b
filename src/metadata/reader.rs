//! ID3-backed tag reader

use super::traits::{TagFields, TagOutcome, TagReadError, TagReader};
use id3::TagLike;
use std::path::Path;

/// Reads ID3v2 tags via the `id3` crate
#[derive(Debug, Default)]
pub struct Id3TagReader;

impl Id3TagReader {
    /// Create a new ID3 tag reader
    pub fn new() -> Self {
        Self
    }
}

impl TagReader for Id3TagReader {
    fn read_tags(&self, path: &Path) -> Result<TagOutcome, TagReadError> {
        match id3::Tag::read_from_path(path) {
            Ok(tag) => Ok(TagOutcome::Container(TagFields {
                title: tag.title().map(str::to_string),
                artist: tag.artist().map(str::to_string),
            })),
            Err(err) => {
                let description = err.to_string();
                match err.kind {
                    // Absence of a tag container is a defined outcome, not a failure
                    id3::ErrorKind::NoTag => Ok(TagOutcome::NoContainer),
                    id3::ErrorKind::Io(io_err) => Err(TagReadError::Io(io_err)),
                    _ => Err(TagReadError::Malformed(description)),
                }
            }
        }
    }
}
