//! Per-playlist and batch export accounting
//!
//! Per-file failures never abort the batch, so their counts are carried
//! in an explicit report instead of being swallowed.

/// Outcome of one playlist export
#[derive(Debug, Clone)]
pub struct PlaylistReport {
    /// Playlist name
    pub playlist: String,

    /// Whether the manifest file was written
    pub written: bool,

    /// Number of track records in the written manifest
    pub tracks: usize,

    /// Files with no tag container (exported with filename fallbacks)
    pub warnings: usize,

    /// Files skipped due to unrecoverable extraction failures
    pub errors: usize,

    /// Whether the playlist was skipped because its input directory
    /// was missing (distinct from a failed manifest write)
    pub skipped: bool,
}

impl PlaylistReport {
    /// Report for a playlist whose input directory was missing
    pub fn skipped(playlist: impl Into<String>) -> Self {
        Self {
            playlist: playlist.into(),
            written: false,
            tracks: 0,
            warnings: 0,
            errors: 0,
            skipped: true,
        }
    }
}

/// Accumulated outcome of a whole export batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One report per processed playlist, in batch order
    pub playlists: Vec<PlaylistReport>,
}

impl BatchReport {
    /// Create an empty batch report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a playlist outcome
    pub fn add(&mut self, report: PlaylistReport) {
        self.playlists.push(report);
    }

    /// Number of manifests actually written
    pub fn written_count(&self) -> usize {
        self.playlists.iter().filter(|p| p.written).count()
    }

    /// Total track records across all written manifests
    pub fn total_tracks(&self) -> usize {
        self.playlists.iter().map(|p| p.tracks).sum()
    }

    /// Total no-container warnings
    pub fn total_warnings(&self) -> usize {
        self.playlists.iter().map(|p| p.warnings).sum()
    }

    /// Total skipped files
    pub fn total_errors(&self) -> usize {
        self.playlists.iter().map(|p| p.errors).sum()
    }
}
