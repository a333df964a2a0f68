//! File operations for the photo store
//!
//! Listing markdown files, reading/writing them, and slug helpers.

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::defaults::MARKDOWN_EXT;
use crate::error::{PhotoResult, PhotoStoreError};

/// Slug of a metadata file (its stem)
pub fn slug_of(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}

/// Check a slug names a single safe file in the metadata directory
pub fn check_slug(slug: &str) -> PhotoResult<()> {
    photo_types::validate_slug(slug).map_err(PhotoStoreError::InvalidPatch)
}

/// List markdown files directly inside `dir`, skipping hidden files and directories
pub async fn list_markdown(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let path = entry.path();
        let hidden = path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(true);
        if hidden {
            continue;
        }
        // Follows symlinks, so linked markdown files are listed
        if !fs::metadata(&path).await?.is_file() {
            continue;
        }
        if path.extension().map(|e| e == MARKDOWN_EXT).unwrap_or(false) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Write a markdown file (creates parent directories as needed)
pub async fn write_markdown(path: &Path, content: &str) -> PhotoResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| PhotoStoreError::io(parent, e))?;
    }
    fs::write(path, content)
        .await
        .map_err(|e| PhotoStoreError::io(path, e))
}

/// Whether a path exists; errors other than NotFound propagate
pub async fn exists(path: &Path) -> PhotoResult<bool> {
    fs::try_exists(path)
        .await
        .map_err(|e| PhotoStoreError::io(path, e))
}
