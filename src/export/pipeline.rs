//! Manifest building pipeline

use super::config::ExportConfig;
use super::paths;
use super::report::{BatchReport, PlaylistReport};
use crate::metadata::{TagOutcome, TagReader};
use crate::model::{Manifest, TrackRecord};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Artist placeholder when the tag container has no usable artist field
pub const UNKNOWN_ARTIST: &str = "Artista Desconocido";

/// Artist placeholder when the file has no tag container at all
pub const UNKNOWN_ARTIST_NO_TAGS: &str = "Artista Desconocido (sin ID3)";

/// Manifest building pipeline
///
/// Walks each playlist folder, resolves (title, artist) per file through
/// the tag reader with filename fallbacks, and writes one sorted JSON
/// manifest per playlist. A single bad file or missing playlist never
/// aborts the batch.
pub struct ManifestPipeline<R: TagReader> {
    config: ExportConfig,
    reader: R,
}

impl<R: TagReader> ManifestPipeline<R> {
    /// Create a new pipeline
    pub fn new(config: ExportConfig, reader: R) -> Self {
        Self { config, reader }
    }

    /// Export every configured playlist, in order
    pub fn export(&self) -> BatchReport {
        log::info!("Starting manifest export");
        log::info!("Music dir: {:?}", self.config.music_dir);
        log::info!("Output dir: {:?}", self.config.data_dir);

        let mut batch = BatchReport::new();
        for playlist in &self.config.playlists {
            log::info!("Processing playlist: '{playlist}'");
            batch.add(self.export_playlist(playlist));
        }

        log::info!(
            "Export complete: {}/{} manifest(s) written, {} track(s), {} warning(s), {} error(s)",
            batch.written_count(),
            batch.playlists.len(),
            batch.total_tracks(),
            batch.total_warnings(),
            batch.total_errors()
        );
        batch
    }

    /// Build and write the manifest for a single playlist
    pub fn export_playlist(&self, playlist: &str) -> PlaylistReport {
        let playlist_dir = self.config.playlist_dir(playlist);
        if !playlist_dir.is_dir() {
            log::error!("Playlist folder does not exist: {:?}", playlist_dir);
            return PlaylistReport::skipped(playlist);
        }

        let output_path = self.config.manifest_path(playlist);
        let anchor = paths::base_anchor(&output_path, &self.config.base_dir_name);

        log::info!("Scanning folder: {:?}", playlist_dir);

        let mut manifest = Manifest::new(playlist);
        let mut warnings = 0;
        let mut errors = 0;

        for entry in WalkDir::new(&playlist_dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Walk error under {:?}: {err}", playlist_dir);
                    errors += 1;
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_mp3(path) {
                continue;
            }

            match self.resolve_track(path, &anchor) {
                Ok((record, no_container)) => {
                    if no_container {
                        warnings += 1;
                    }
                    log::debug!(
                        "Resolved: '{}' by '{}' -> '{}'",
                        record.title,
                        record.artist,
                        record.file_path
                    );
                    manifest.push(record);
                }
                Err(err) => {
                    log::warn!("Skipping {:?}: {err:#}", path);
                    errors += 1;
                }
            }
        }

        manifest.sort_by_title();

        let written = match write_manifest(&output_path, &manifest) {
            Ok(()) => {
                log::info!(
                    "Manifest {:?} written with {} track(s)",
                    output_path,
                    manifest.len()
                );
                true
            }
            Err(err) => {
                log::error!("Failed to write manifest {:?}: {err:#}", output_path);
                false
            }
        };

        PlaylistReport {
            playlist: playlist.to_string(),
            written,
            tracks: manifest.len(),
            warnings,
            errors,
            skipped: false,
        }
    }

    /// Resolve one audio file into a track record
    ///
    /// The returned flag marks the no-container case, which is counted as
    /// a warning by the caller. Title and artist resolution:
    /// - container with non-blank field: trimmed tag value
    /// - container with absent/blank title: file stem as-is
    /// - container with absent/blank artist: `UNKNOWN_ARTIST`
    /// - no container: file stem with `_`/`-` turned into spaces, and
    ///   `UNKNOWN_ARTIST_NO_TAGS` to distinguish "no tags at all" from
    ///   "tag present but empty"
    fn resolve_track(&self, path: &Path, anchor: &Path) -> Result<(TrackRecord, bool)> {
        let outcome = self
            .reader
            .read_tags(path)
            .context("tag extraction failed")?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .trim();

        let (mut title, artist, no_container) = match outcome {
            TagOutcome::Container(fields) => {
                let title = non_blank(fields.title.as_deref())
                    .unwrap_or(stem)
                    .to_string();
                let artist = non_blank(fields.artist.as_deref())
                    .unwrap_or(UNKNOWN_ARTIST)
                    .to_string();
                (title, artist, false)
            }
            TagOutcome::NoContainer => {
                log::warn!(
                    "{:?} has no ID3 tags; deriving title from the file name",
                    path
                );
                let title = stem.replace(['_', '-'], " ").trim().to_string();
                (title, UNKNOWN_ARTIST_NO_TAGS.to_string(), true)
            }
        };
        if title.is_empty() {
            title = stem.to_string();
        }

        let file_path = paths::web_relative_path(path, anchor)
            .with_context(|| format!("no web-relative path from {anchor:?}"))?;

        Ok((TrackRecord { title, artist, file_path }, no_container))
    }
}

/// Trimmed value of a tag field, or `None` when absent or blank
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive `.mp3` extension check
fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"))
}

/// Write the manifest, creating parent directories on demand
fn write_manifest(output_path: &Path, manifest: &Manifest) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {parent:?}"))?;
    }

    let json = manifest.to_json_pretty()?;
    fs::write(output_path, json)
        .with_context(|| format!("Failed to write manifest {output_path:?}"))?;

    Ok(())
}
