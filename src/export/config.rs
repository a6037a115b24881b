//! Export configuration

use std::path::PathBuf;

/// Configuration for one manifest export batch
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Base music directory containing one subdirectory per playlist
    pub music_dir: PathBuf,

    /// Output directory for the generated JSON manifests
    pub data_dir: PathBuf,

    /// Ancestor directory name anchoring web-relative paths
    /// (the web client references files as `<base>/<playlist>/<file>`)
    pub base_dir_name: String,

    /// Playlist folder names to export, in processing order
    pub playlists: Vec<String>,
}

impl ExportConfig {
    /// Create a new export configuration
    ///
    /// Relative directories are resolved against the current working
    /// directory so relative-path computation never mixes absolute and
    /// relative roots. The base directory name defaults to the music
    /// dir's own file name.
    pub fn new(music_dir: PathBuf, data_dir: PathBuf) -> Self {
        let music_dir = absolutize(music_dir);
        let data_dir = absolutize(data_dir);
        let base_dir_name = music_dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("music")
            .to_string();

        Self {
            music_dir,
            data_dir,
            base_dir_name,
            playlists: Vec::new(),
        }
    }

    /// Set the playlists to export
    pub fn with_playlists(mut self, playlists: Vec<String>) -> Self {
        self.playlists = playlists;
        self
    }

    /// Override the base directory name used for relative paths
    pub fn with_base_name(mut self, name: impl Into<String>) -> Self {
        self.base_dir_name = name.into();
        self
    }

    /// Input directory for a playlist
    pub fn playlist_dir(&self, playlist: &str) -> PathBuf {
        self.music_dir.join(playlist)
    }

    /// Output manifest path for a playlist
    pub fn manifest_path(&self, playlist: &str) -> PathBuf {
        self.data_dir.join(format!("{playlist}.json"))
    }
}

/// Resolve a relative path against the current working directory
fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_base_name_defaults_to_music_dir_name() {
        let config = ExportConfig::new(PathBuf::from("/proj/canciones"), PathBuf::from("/proj/data"));
        assert_eq!(config.base_dir_name, "canciones");
    }

    #[test]
    fn test_derived_paths() {
        let config = ExportConfig::new(PathBuf::from("/proj/canciones"), PathBuf::from("/proj/data"))
            .with_playlists(vec!["espanol".to_string()]);

        assert_eq!(config.playlist_dir("espanol"), Path::new("/proj/canciones/espanol"));
        assert_eq!(config.manifest_path("espanol"), Path::new("/proj/data/espanol.json"));
    }

    #[test]
    fn test_relative_dirs_resolve_against_cwd() {
        let config = ExportConfig::new(PathBuf::from("canciones"), PathBuf::from("data"));

        assert!(config.music_dir.is_absolute());
        assert!(config.data_dir.is_absolute());
        assert_eq!(config.base_dir_name, "canciones");
        assert!(config.playlist_dir("espanol").is_absolute());
    }

    #[test]
    fn test_mixed_absolute_and_relative_dirs_share_a_root_form() {
        let config = ExportConfig::new(PathBuf::from("/proj/canciones"), PathBuf::from("data"));

        // Both roots end up absolute, so pathdiff always finds a relative path
        assert!(config.music_dir.is_absolute());
        assert!(config.data_dir.is_absolute());
        assert_eq!(config.music_dir, Path::new("/proj/canciones"));
    }
}
