//! PhotoStore — list, read and update photo metadata on disk
//!
//! The filesystem is the source of truth: every call re-reads the markdown
//! files, nothing is cached between requests.

use photo_types::PhotoPatch;
use std::path::Path;
use tokio::fs;

use super::entry::PhotoEntry;
use super::rename::{self, RenameReport};
use super::{file_ops, frontmatter, merge};
use crate::config::PhotoStoreConfig;
use crate::error::{PhotoResult, PhotoStoreError};

/// Result of a successful update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub slug: String,
    pub src_path: String,
    /// Set when the slug changed and files were relocated
    pub renamed: Option<RenameReport>,
}

pub struct PhotoStore {
    config: PhotoStoreConfig,
}

impl PhotoStore {
    pub fn new(config: PhotoStoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PhotoStoreConfig {
        &self.config
    }

    /// All photos, newest first. Any unreadable file or invalid YAML fails the whole listing.
    pub async fn list_photos(&self) -> PhotoResult<Vec<PhotoEntry>> {
        let dir = &self.config.metadata_dir;
        fs::create_dir_all(dir)
            .await
            .map_err(|e| PhotoStoreError::io(dir, e))?;

        let files = file_ops::list_markdown(dir)
            .await
            .map_err(|e| PhotoStoreError::io(dir, e))?;

        let mut photos = Vec::with_capacity(files.len());
        for path in files {
            let Some(slug) = file_ops::slug_of(&path) else {
                continue;
            };
            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| PhotoStoreError::io(&path, e))?;
            photos.push(entry_from(&path, &slug, &content)?);
        }

        photos.sort_by_key(|p| std::cmp::Reverse(p.date()));
        log::debug!("[PHOTOS] Listed {} photos from {}", photos.len(), dir.display());
        Ok(photos)
    }

    /// One photo by slug
    pub async fn get_photo(&self, slug: &str) -> PhotoResult<PhotoEntry> {
        if file_ops::check_slug(slug).is_err() {
            return Err(PhotoStoreError::NotFound(slug.to_string()));
        }
        let path = self.config.markdown_path(slug);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|_| PhotoStoreError::NotFound(slug.to_string()))?;
        entry_from(&path, slug, &content)
    }

    /// Merge `patch` into `<slug>.md`, writing to the (possibly new) slug's path
    pub async fn update_photo(&self, slug: &str, patch: &PhotoPatch) -> PhotoResult<UpdateOutcome> {
        file_ops::check_slug(slug)?;
        patch.validate().map_err(PhotoStoreError::InvalidPatch)?;

        let old_path = self.config.markdown_path(slug);
        let content = match fs::read_to_string(&old_path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PhotoStoreError::NotFound(slug.to_string()));
            }
            Err(e) => return Err(PhotoStoreError::io(&old_path, e)),
        };
        let doc = frontmatter::parse_doc(&content)
            .map_err(|e| PhotoStoreError::frontmatter(&old_path, e))?;

        let new_slug = patch.slug.clone().unwrap_or_else(|| slug.to_string());
        let src_path = self.config.src_path_for(&new_slug);
        if !src_path.starts_with('/') {
            return Err(PhotoStoreError::InvalidSrcPath(format!(
                "'{}' must start with '/'",
                src_path
            )));
        }

        let mut merged = doc.frontmatter;
        merge::apply_patch(&mut merged, patch, &src_path)
            .map_err(|e| PhotoStoreError::frontmatter(&old_path, e))?;

        let body = patch.body().unwrap_or(&doc.body);
        let new_path = self.config.markdown_path(&new_slug);
        let markdown = frontmatter::stringify(&merged, body)
            .map_err(|e| PhotoStoreError::frontmatter(&new_path, e))?;

        if new_slug != slug && file_ops::exists(&new_path).await? {
            log::warn!(
                "[PHOTOS] {} already exists and will be overwritten by rename of '{}'",
                new_path.display(),
                slug
            );
        }

        file_ops::write_markdown(&new_path, &markdown).await?;
        log::info!("[PHOTOS] Updated metadata file: {}", new_path.display());

        let renamed = if new_slug != slug {
            Some(rename::relocate(&self.config, slug, &new_slug).await?)
        } else {
            None
        };

        Ok(UpdateOutcome {
            slug: new_slug,
            src_path,
            renamed,
        })
    }
}

/// Parse a markdown file's frontmatter; only YAML syntax errors fail
fn entry_from(path: &Path, slug: &str, content: &str) -> PhotoResult<PhotoEntry> {
    let doc = frontmatter::parse_doc(content).map_err(|e| PhotoStoreError::frontmatter(path, e))?;
    Ok(PhotoEntry::new(slug, doc.frontmatter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_types::{InstagramTag, Location, PhotoRecord, PhotoTag};
    use serde_yaml::Value;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn typed(entry: PhotoEntry) -> PhotoRecord {
        let mut fm = entry.frontmatter;
        fm.remove("slug");
        let mut record: PhotoRecord = serde_yaml::from_value(Value::Mapping(fm)).unwrap();
        record.slug = entry.slug;
        record
    }

    fn setup() -> (TempDir, PhotoStore) {
        let tmp = TempDir::new().unwrap();
        let cfg = PhotoStoreConfig::new(tmp.path().join("md"), tmp.path().join("assets"), "/images");
        stdfs::create_dir_all(&cfg.metadata_dir).unwrap();
        stdfs::create_dir_all(&cfg.asset_dir).unwrap();
        (tmp, PhotoStore::new(cfg))
    }

    fn write_photo(store: &PhotoStore, slug: &str, date: &str) {
        let content = format!(
            "---\ntitle: {slug}\nalt: Alt for {slug}\ndate: {date}\ntags:\n  - travel\nsrcPath: /images/{slug}/img.avif\nshotOnFilm: false\n---\n\nBody of {slug}\n"
        );
        stdfs::write(store.config().markdown_path(slug), content).unwrap();
    }

    #[tokio::test]
    async fn test_list_sorted_newest_first() {
        let (_tmp, store) = setup();
        write_photo(&store, "jan", "2024-01-01");
        write_photo(&store, "jun", "2024-06-01");
        write_photo(&store, "dec", "2023-12-01");

        let photos = store.list_photos().await.unwrap();
        let slugs: Vec<&str> = photos.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["jun", "jan", "dec"]);
    }

    #[tokio::test]
    async fn test_list_fails_on_any_bad_file() {
        let (_tmp, store) = setup();
        write_photo(&store, "good", "2024-01-01");
        stdfs::write(store.config().markdown_path("bad"), "---\ntitle: [oops\n---\n").unwrap();

        let err = store.list_photos().await.unwrap_err();
        assert!(matches!(err, PhotoStoreError::Frontmatter { .. }));
    }

    #[tokio::test]
    async fn test_incomplete_record_still_lists_and_opens() {
        let (_tmp, store) = setup();
        write_photo(&store, "dated", "2024-01-01");
        stdfs::write(store.config().markdown_path("draft"), "---\ntitle: 1984\n---\nNotes\n").unwrap();

        let photos = store.list_photos().await.unwrap();
        let slugs: Vec<&str> = photos.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["dated", "draft"]);

        let draft = store.get_photo("draft").await.unwrap();
        assert_eq!(draft.frontmatter.get("title"), Some(&Value::from(1984)));
        assert!(draft.frontmatter.get("alt").is_none());
        assert!(draft.frontmatter.get("srcPath").is_none());
    }

    #[tokio::test]
    async fn test_get_keeps_keys_outside_the_schema() {
        let (_tmp, store) = setup();
        write_photo(&store, "roll", "2024-02-02");

        let entry = store.get_photo("roll").await.unwrap();
        assert_eq!(entry.frontmatter.get("shotOnFilm"), Some(&Value::Bool(false)));
    }

    #[tokio::test]
    async fn test_list_creates_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let cfg = PhotoStoreConfig::new(tmp.path().join("fresh"), tmp.path().join("fresh"), "/images");
        let store = PhotoStore::new(cfg);
        assert!(store.list_photos().await.unwrap().is_empty());
        assert!(tmp.path().join("fresh").is_dir());
    }

    #[tokio::test]
    async fn test_filename_stem_wins_over_frontmatter_slug() {
        let (_tmp, store) = setup();
        stdfs::write(
            store.config().markdown_path("real"),
            "---\nslug: stale\ntitle: t\nalt: a\ndate: 2024-01-01\nsrcPath: /images/real/img.avif\n---\n",
        )
        .unwrap();
        assert_eq!(store.get_photo("real").await.unwrap().slug, "real");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found_and_writes_nothing() {
        let (_tmp, store) = setup();
        let err = store.get_photo("nope").await.unwrap_err();
        assert!(matches!(err, PhotoStoreError::NotFound(_)));
        assert!(!store.config().markdown_path("nope").exists());
    }

    #[tokio::test]
    async fn test_update_in_place_preserves_other_fields() {
        let (_tmp, store) = setup();
        write_photo(&store, "lyall-bay", "2024-06-01");

        let patch = PhotoPatch {
            title: Some("Lyall Bay at Dusk".to_string()),
            ..Default::default()
        };
        let outcome = store.update_photo("lyall-bay", &patch).await.unwrap();
        assert_eq!(outcome.slug, "lyall-bay");
        assert_eq!(outcome.renamed, None);

        let raw = stdfs::read_to_string(store.config().markdown_path("lyall-bay")).unwrap();
        assert!(raw.contains("shotOnFilm: false"));
        assert!(raw.ends_with("\nBody of lyall-bay\n"));
        let title_at = raw.find("title:").unwrap();
        let alt_at = raw.find("alt:").unwrap();
        assert!(title_at < alt_at);

        let record = typed(store.get_photo("lyall-bay").await.unwrap());
        assert_eq!(record.title, "Lyall Bay at Dusk");
        assert_eq!(record.alt, "Alt for lyall-bay");
        assert_eq!(record.tags, vec![PhotoTag::Travel]);
        assert_eq!(record.date.to_string(), "2024-06-01T00:00:00.000Z");
    }

    #[tokio::test]
    async fn test_update_with_new_slug_relocates_files() {
        let (_tmp, store) = setup();
        let cfg = store.config().clone();
        write_photo(&store, "old", "2024-06-01");
        stdfs::create_dir_all(cfg.asset_dir_for("old")).unwrap();
        stdfs::write(cfg.asset_dir_for("old").join("img.avif"), b"avif").unwrap();

        let patch = PhotoPatch {
            slug: Some("new".to_string()),
            content: Some("Fresh body".to_string()),
            ..Default::default()
        };
        let outcome = store.update_photo("old", &patch).await.unwrap();

        assert_eq!(outcome.slug, "new");
        assert_eq!(outcome.src_path, "/images/new/img.avif");
        assert_eq!(
            outcome.renamed,
            Some(RenameReport { removed_metadata: true, moved_assets: 1 })
        );
        assert!(!cfg.markdown_path("old").exists());
        assert!(!cfg.asset_dir_for("old").exists());
        assert!(cfg.asset_dir_for("new").join("img.avif").exists());

        let raw = stdfs::read_to_string(cfg.markdown_path("new")).unwrap();
        assert!(raw.contains("srcPath: /images/new/img.avif"));
        assert!(raw.ends_with("---\nFresh body\n"));
        assert!(!raw.contains("slug:"));
    }

    #[tokio::test]
    async fn test_bad_base_path_fails_without_writing() {
        let tmp = TempDir::new().unwrap();
        let cfg = PhotoStoreConfig::new(tmp.path().join("md"), tmp.path().join("md"), "images");
        stdfs::create_dir_all(&cfg.metadata_dir).unwrap();
        let store = PhotoStore::new(cfg.clone());
        write_photo(&store, "x", "2024-01-01");
        let before = stdfs::read_to_string(cfg.markdown_path("x")).unwrap();

        let patch = PhotoPatch {
            slug: Some("y".to_string()),
            title: Some("changed".to_string()),
            ..Default::default()
        };
        let err = store.update_photo("x", &patch).await.unwrap_err();

        assert!(matches!(err, PhotoStoreError::InvalidSrcPath(_)));
        assert!(!cfg.markdown_path("y").exists());
        assert_eq!(stdfs::read_to_string(cfg.markdown_path("x")).unwrap(), before);
    }

    #[tokio::test]
    async fn test_invalid_patch_rejected_before_io() {
        let (_tmp, store) = setup();
        let patch = PhotoPatch {
            slug: Some("../escape".to_string()),
            ..Default::default()
        };
        // File doesn't exist, so reaching I/O would give NotFound instead
        let err = store.update_photo("missing", &patch).await.unwrap_err();
        assert!(matches!(err, PhotoStoreError::InvalidPatch(_)));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (_tmp, store) = setup();
        let err = store
            .update_photo("missing", &PhotoPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PhotoStoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_round_trip_nested_fields() {
        let (_tmp, store) = setup();
        write_photo(&store, "gig", "2024-03-09");

        let patch = PhotoPatch {
            date: Some("2024-03-09T21:15:00Z".parse().unwrap()),
            tags: Some(vec![PhotoTag::Concert]),
            location: Some(Location {
                name: "San Fran".to_string(),
                url: Some("https://sanfran.co.nz".to_string()),
                flag: Some("NZ".to_string().try_into().unwrap()),
            }),
            instagram_tags: Some(vec![InstagramTag {
                username: "drummer".to_string(),
                position: [42.0, 57.5],
            }]),
            ..Default::default()
        };
        store.update_photo("gig", &patch).await.unwrap();

        let record = typed(store.get_photo("gig").await.unwrap());
        assert_eq!(record.date, patch.date.unwrap());
        assert_eq!(record.tags, vec![PhotoTag::Concert]);
        assert_eq!(record.location, patch.location);
        assert_eq!(record.instagram_tags, patch.instagram_tags);
        assert_eq!(record.src_path, "/images/gig/img.avif");
    }
}
