use anyhow::{Context, Result};
use clap::Parser;
use manifest_exporter::metadata::Id3TagReader;
use manifest_exporter::{ExportConfig, ManifestPipeline};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "manifest-exporter")]
#[command(about = "Generate per-playlist JSON manifests from ID3 tags", long_about = None)]
struct Args {
    /// Base music directory containing one subdirectory per playlist
    #[arg(short = 'm', long, default_value = "canciones")]
    music_dir: String,

    /// Output directory for the generated JSON manifests
    #[arg(short = 'd', long, default_value = "data")]
    data_dir: String,

    /// Ancestor directory name anchoring web-relative paths
    /// (defaults to the music dir's own name)
    #[arg(long)]
    base_name: Option<String>,

    /// Playlist folder names to export (default: every subdirectory of the music dir)
    playlists: Vec<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let music_dir = PathBuf::from(shellexpand::tilde(&args.music_dir).as_ref());
    let data_dir = PathBuf::from(shellexpand::tilde(&args.data_dir).as_ref());

    let playlists = if args.playlists.is_empty() {
        discover_playlists(&music_dir)?
    } else {
        args.playlists.clone()
    };

    if playlists.is_empty() {
        log::warn!("No playlist folders found under {:?}", music_dir);
        return Ok(());
    }

    log::info!("Exporting {} playlist(s): {:?}", playlists.len(), playlists);

    let mut config = ExportConfig::new(music_dir, data_dir.clone()).with_playlists(playlists);
    if let Some(base_name) = args.base_name {
        config = config.with_base_name(base_name);
    }

    let pipeline = ManifestPipeline::new(config, Id3TagReader::new());
    let report = pipeline.export();

    log::info!("Manifests saved under: {:?}", data_dir);
    if report.total_errors() > 0 {
        log::warn!("{} file(s) were skipped; re-run with -v for details", report.total_errors());
    }

    Ok(())
}

/// List the immediate subdirectories of the music dir, sorted by name
fn discover_playlists(music_dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(music_dir)
        .with_context(|| format!("Failed to read music directory {music_dir:?}"))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
