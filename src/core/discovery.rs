//! Recursive discovery of candidate vector files below a root directory.
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// Extension of the main shapefile component
pub const SHAPEFILE_EXTENSION: &str = "shp";

#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Extension to match (case-insensitive, leading dot optional)
    pub extension: String,
    /// Follow symbolic links; loops are reported and skipped
    pub follow_links: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extension: SHAPEFILE_EXTENSION.to_string(),
            follow_links: false,
        }
    }
}

fn suffix_for(extension: &str) -> String {
    format!(".{}", extension.trim_start_matches('.').to_lowercase())
}

/// True if the file name of `path` ends with `.{extension}`, ignoring case
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let suffix = suffix_for(extension);
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(&suffix))
        .unwrap_or(false)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Validate that `root` is an existing directory and return its absolute form
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(Error::invalid_input(root, "directory does not exist"));
    }
    if !root.is_dir() {
        return Err(Error::invalid_input(root, "not a directory"));
    }
    Ok(root.canonicalize()?)
}

/// Lazily walk `root` and yield the absolute path of every file whose name ends
/// with the configured extension, at any depth.
///
/// Siblings are visited in file-name order. Unreadable directories and
/// symlink loops are logged and skipped rather than aborting the walk.
pub fn discover_files(
    root: &Path,
    options: &DiscoveryOptions,
) -> Result<impl Iterator<Item = PathBuf>> {
    let root = validate_root(root)?;
    let extension = options.extension.clone();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name()
        .into_iter();

    Ok(walker
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable path {:?}: {}", err.path(), err);
                None
            }
        })
        .filter(is_regular_file)
        .filter(move |entry| has_extension(entry.path(), &extension))
        .map(DirEntry::into_path))
}
