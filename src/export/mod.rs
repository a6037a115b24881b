//! Manifest export orchestration

pub mod config;
pub mod paths;
pub mod pipeline;
pub mod report;

pub use config::ExportConfig;
pub use pipeline::ManifestPipeline;
pub use report::{BatchReport, PlaylistReport};
