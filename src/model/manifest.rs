use super::TrackRecord;
use anyhow::{Context, Result};

/// Ordered track list for one playlist
///
/// Serializes to a bare JSON array of records; the playlist name only
/// drives the output file name and log messages.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Playlist name (e.g. "espanol")
    pub playlist: String,

    records: Vec<TrackRecord>,
}

impl Manifest {
    /// Create a new empty manifest for the given playlist
    pub fn new(playlist: impl Into<String>) -> Self {
        Self {
            playlist: playlist.into(),
            records: Vec::new(),
        }
    }

    /// Append a track record
    pub fn push(&mut self, record: TrackRecord) {
        self.records.push(record);
    }

    /// Sort records ascending by lowercase title
    pub fn sort_by_title(&mut self) {
        self.records.sort_by_cached_key(|r| r.title.to_lowercase());
    }

    /// All records in their current order
    pub fn records(&self) -> &[TrackRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the manifest is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize to pretty-printed JSON (2-space indent, non-ASCII preserved)
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.records)
            .with_context(|| format!("Failed to serialize manifest for '{}'", self.playlist))
    }

    /// Parse a manifest back from its JSON form
    pub fn from_json(playlist: impl Into<String>, json: &str) -> Result<Self> {
        let records: Vec<TrackRecord> =
            serde_json::from_str(json).context("Failed to parse manifest JSON")?;
        Ok(Self {
            playlist: playlist.into(),
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, artist: &str, file_path: &str) -> TrackRecord {
        TrackRecord {
            title: title.to_string(),
            artist: artist.to_string(),
            file_path: file_path.to_string(),
        }
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut manifest = Manifest::new("test");
        manifest.push(record("zebra", "A", "a.mp3"));
        manifest.push(record("Alpha", "B", "b.mp3"));
        manifest.push(record("beta", "C", "c.mp3"));

        manifest.sort_by_title();

        let titles: Vec<&str> = manifest.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "zebra"]);
    }

    #[test]
    fn test_json_field_names() {
        let mut manifest = Manifest::new("test");
        manifest.push(record("Canción", "Señor Artista", "espanol/cancion.mp3"));

        let json = manifest.to_json_pretty().unwrap();
        assert!(json.contains("\"titulo\""));
        assert!(json.contains("\"artista\""));
        assert!(json.contains("\"archivo\""));
        // Non-ASCII characters are written literally, not escaped
        assert!(json.contains("Canción"));
        assert!(json.contains("Señor Artista"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut manifest = Manifest::new("test");
        manifest.push(record("B Side", "Artist Two", "p/b.mp3"));
        manifest.push(record("A Side", "Artist One", "p/a.mp3"));
        manifest.sort_by_title();

        let json = manifest.to_json_pretty().unwrap();
        let parsed = Manifest::from_json("test", &json).unwrap();

        assert_eq!(parsed.records(), manifest.records());
    }
}
