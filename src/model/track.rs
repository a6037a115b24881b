use serde::{Deserialize, Serialize};

/// A single manifest entry describing one audio file
///
/// Field names are serialized as the web client expects them
/// (`titulo` / `artista` / `archivo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Track title, tag value or filename-derived fallback; never blank
    #[serde(rename = "titulo")]
    pub title: String,

    /// Artist name, tag value or placeholder; never blank
    #[serde(rename = "artista")]
    pub artist: String,

    /// Forward-slash path relative to the base music directory,
    /// suitable for embedding in a web page
    #[serde(rename = "archivo")]
    pub file_path: String,
}
