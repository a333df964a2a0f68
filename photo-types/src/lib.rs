//! Shared types for the photo metadata backend and its web form.

pub mod country;
pub mod date;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use country::CountryCode;
pub use date::PhotoDate;
pub use vocabulary::{CameraMake, CameraModel, LensModel, LinkType, PhotoTag, Vocabulary, VocabularyEntry};

/// Required prefix for inline blurred previews
pub const BLUR_HASH_PREFIX: &str = "data:image/";

// =====================================================
// Domain Types
// =====================================================

/// Camera settings for a photo. Only make and model are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraMetadata {
    pub make: CameraMake,
    pub model: CameraModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens: Option<LensModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_stop: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shutter_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<CountryCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
}

/// An Instagram handle overlaid on the image at `[y, x]` percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstagramTag {
    pub username: String,
    pub position: [f64; 2],
}

impl InstagramTag {
    pub fn validate(&self) -> Result<(), String> {
        for coord in self.position {
            if !(0.0..=100.0).contains(&coord) {
                return Err(format!(
                    "instagram tag '{}' position {} is outside 0..=100",
                    self.username, coord
                ));
            }
        }
        Ok(())
    }
}

/// A photo as read back from its markdown frontmatter.
///
/// `slug` comes from the filename stem, never from the frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    #[serde(default)]
    pub slug: String,
    pub title: String,
    pub alt: String,
    pub date: PhotoDate,
    #[serde(default)]
    pub tags: Vec<PhotoTag>,
    pub src_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CameraMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_tags: Option<Vec<InstagramTag>>,
}

// =====================================================
// Request Types
// =====================================================

/// Partial update for a photo. Absent fields keep their stored value;
/// present fields replace it wholesale, nested objects included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PhotoPatch {
    /// New slug; renames the markdown file and asset directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Markdown body. Not a frontmatter key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<PhotoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<PhotoTag>>,
    /// Accepted for schema parity; the backend always recomputes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CameraMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_tags: Option<Vec<InstagramTag>>,
}

impl PhotoPatch {
    /// Check the rules serde can't express
    pub fn validate(&self) -> Result<(), String> {
        if let Some(slug) = &self.slug {
            validate_slug(slug)?;
        }
        if let Some(src_path) = &self.src_path {
            if !src_path.starts_with('/') {
                return Err(format!("srcPath '{}' must start with '/'", src_path));
            }
        }
        if let Some(blur) = &self.blur_hash {
            if !blur.starts_with(BLUR_HASH_PREFIX) {
                return Err(format!("blurHash must start with '{}'", BLUR_HASH_PREFIX));
            }
        }
        if let Some(tags) = &self.instagram_tags {
            for tag in tags {
                tag.validate()?;
            }
        }
        Ok(())
    }

    /// Body to write, if the caller supplied a non-empty one
    pub fn body(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// A slug must be a single safe path segment
pub fn validate_slug(slug: &str) -> Result<(), String> {
    if slug.trim().is_empty() {
        return Err("slug is empty".to_string());
    }
    if slug.contains('/') || slug.contains('\\') || slug.contains("..") || slug.starts_with('.') {
        return Err(format!("slug '{}' is not a valid file name", slug));
    }
    Ok(())
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub message: String,
    pub slug: String,
    pub src_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
