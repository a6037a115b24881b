//! Metadata extraction layer
//!
//! Tag reading goes through a trait-based abstraction so the manifest
//! pipeline can be exercised with scripted readers in tests while
//! production uses the ID3 implementation.

mod reader;
mod traits;

pub use reader::Id3TagReader;
pub use traits::{TagFields, TagOutcome, TagReadError, TagReader};
