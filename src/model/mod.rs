//! Data model for playlist manifests
//!
//! These structures are independent of both the tag-reading input side
//! and the JSON output format consumed by the web client.

mod manifest;
mod track;

pub use manifest::Manifest;
pub use track::TrackRecord;
