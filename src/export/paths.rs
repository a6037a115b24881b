//! Web-facing relative path computation
//!
//! Manifest paths must be usable by a web client, so they are expressed
//! relative to the base music directory and joined with `/` regardless of
//! host path conventions.

use std::path::{Component, Path, PathBuf};

/// Anchor directory for relative path computation
///
/// The base music directory sits next to the output file's parent
/// (`<project>/data/espanol.json` anchors at `<project>/<base_dir_name>`),
/// so the web client can reference files as `<base>/<playlist>/<file>`.
pub fn base_anchor(output_path: &Path, base_dir_name: &str) -> PathBuf {
    let data_dir = output_path.parent().unwrap_or_else(|| Path::new(""));
    let site_root = data_dir.parent().unwrap_or_else(|| Path::new(""));
    site_root.join(base_dir_name)
}

/// Express `file` relative to `anchor`, joined with `/` unconditionally
///
/// Returns `None` when no relative path exists (mixed absolute/relative
/// inputs) or a component is not valid UTF-8. Like `os.path.relpath`, the
/// result may contain `..` segments when the file lives outside the anchor.
pub fn web_relative_path(file: &Path, anchor: &Path) -> Option<String> {
    let rel = pathdiff::diff_paths(file, anchor)?;

    let mut parts: Vec<String> = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?.to_string()),
            Component::ParentDir => parts.push("..".to_string()),
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_file_relative_to_base() {
        let anchor = base_anchor(Path::new("/proj/data/espanol.json"), "canciones");
        assert_eq!(anchor, Path::new("/proj/canciones"));

        let rel = web_relative_path(Path::new("/proj/canciones/espanol/Cancion_Uno.mp3"), &anchor);
        assert_eq!(rel.as_deref(), Some("espanol/Cancion_Uno.mp3"));
    }

    #[test]
    fn test_relative_inputs() {
        let anchor = base_anchor(Path::new("data/espanol.json"), "canciones");
        assert_eq!(anchor, Path::new("canciones"));

        let rel = web_relative_path(Path::new("canciones/espanol/a.mp3"), &anchor);
        assert_eq!(rel.as_deref(), Some("espanol/a.mp3"));
    }

    #[test]
    fn test_file_outside_anchor_uses_parent_segments() {
        let rel = web_relative_path(Path::new("/proj/otros/b.mp3"), Path::new("/proj/canciones"));
        assert_eq!(rel.as_deref(), Some("../otros/b.mp3"));
    }

    #[test]
    fn test_nested_subfolder_is_preserved() {
        let rel = web_relative_path(
            Path::new("/proj/canciones/espanol/disco1/c.mp3"),
            Path::new("/proj/canciones"),
        );
        assert_eq!(rel.as_deref(), Some("espanol/disco1/c.mp3"));
    }
}
