//! Manifest Exporter - playlist folders to web-client JSON manifests
//!
//! This library scans playlist folders for MP3 files, resolves title and
//! artist from embedded ID3 tags with filename fallbacks, and writes one
//! sorted JSON manifest per playlist for a web playback front end.

pub mod export;
pub mod metadata;
pub mod model;

pub use export::config::ExportConfig;
pub use export::pipeline::ManifestPipeline;
