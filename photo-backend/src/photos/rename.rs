//! Relocate a photo's files after its slug changes.
//!
//! Runs after the new metadata file has been written. Nothing is rolled back:
//! a failure midway leaves the new metadata file in place and the old files
//! partially migrated.

use tokio::fs;

use super::file_ops;
use crate::config::PhotoStoreConfig;
use crate::error::{PhotoResult, PhotoStoreError};

/// What `relocate` actually touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub removed_metadata: bool,
    pub moved_assets: usize,
}

/// Remove `<old>.md` and move `<asset_dir>/<old>/*` into `<asset_dir>/<new>/`
pub async fn relocate(
    config: &PhotoStoreConfig,
    old_slug: &str,
    new_slug: &str,
) -> PhotoResult<RenameReport> {
    let mut report = RenameReport::default();
    if old_slug == new_slug {
        return Ok(report);
    }

    let old_md = config.markdown_path(old_slug);
    if file_ops::exists(&old_md).await? {
        fs::remove_file(&old_md)
            .await
            .map_err(|e| PhotoStoreError::io(&old_md, e))?;
        report.removed_metadata = true;
        log::info!("[PHOTOS] Removed old markdown file {}", old_md.display());
    }

    let old_dir = config.asset_dir_for(old_slug);
    let is_dir = match fs::metadata(&old_dir).await {
        Ok(meta) => meta.is_dir(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => return Err(PhotoStoreError::io(&old_dir, e)),
    };
    if !is_dir {
        log::debug!("[PHOTOS] No asset directory for '{}', nothing to move", old_slug);
        return Ok(report);
    }

    let new_dir = config.asset_dir_for(new_slug);
    fs::create_dir_all(&new_dir)
        .await
        .map_err(|e| PhotoStoreError::io(&new_dir, e))?;

    let mut entries = fs::read_dir(&old_dir)
        .await
        .map_err(|e| PhotoStoreError::io(&old_dir, e))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| PhotoStoreError::io(&old_dir, e))?
    {
        let from = entry.path();
        let to = new_dir.join(entry.file_name());
        fs::rename(&from, &to)
            .await
            .map_err(|e| PhotoStoreError::io(&from, e))?;
        report.moved_assets += 1;
    }

    fs::remove_dir_all(&old_dir)
        .await
        .map_err(|e| PhotoStoreError::io(&old_dir, e))?;
    log::info!(
        "[PHOTOS] Moved {} asset(s) from {} to {}",
        report.moved_assets,
        old_dir.display(),
        new_dir.display()
    );

    Ok(report)
}
