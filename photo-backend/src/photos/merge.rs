//! Shallow merge of a `PhotoPatch` into stored frontmatter.
//!
//! Per field:
//! - absent in the patch: stored value kept as-is
//! - present: stored value replaced wholesale (a partial `location` or
//!   `metadata` object does not merge with the old one)
//! - `slug` and `content` are never frontmatter keys
//! - `srcPath` is always set to the computed value, last
//!
//! Existing keys keep their position; new keys are appended.

use photo_types::PhotoPatch;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

pub const SRC_PATH_KEY: &str = "srcPath";

pub fn apply_patch(
    frontmatter: &mut Mapping,
    patch: &PhotoPatch,
    src_path: &str,
) -> Result<(), serde_yaml::Error> {
    set(frontmatter, "title", &patch.title)?;
    set(frontmatter, "alt", &patch.alt)?;
    set(frontmatter, "date", &patch.date)?;
    set(frontmatter, "tags", &patch.tags)?;
    set(frontmatter, SRC_PATH_KEY, &patch.src_path)?;
    set(frontmatter, "blurHash", &patch.blur_hash)?;
    set(frontmatter, "metadata", &patch.metadata)?;
    set(frontmatter, "location", &patch.location)?;
    set(frontmatter, "links", &patch.links)?;
    set(frontmatter, "instagramTags", &patch.instagram_tags)?;

    frontmatter.insert(Value::from(SRC_PATH_KEY), Value::from(src_path));
    Ok(())
}

fn set<T: Serialize>(
    frontmatter: &mut Mapping,
    key: &str,
    value: &Option<T>,
) -> Result<(), serde_yaml::Error> {
    if let Some(value) = value {
        frontmatter.insert(Value::from(key), serde_yaml::to_value(value)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_types::{Location, PhotoTag};

    fn stored() -> Mapping {
        serde_yaml::from_str(
            "title: Old\nalt: Old alt\ncamera_note: handheld\nlocation:\n  name: Wellington\n  flag: NZ\nsrcPath: /images/old/img.avif\n",
        )
        .unwrap()
    }

    fn keys(m: &Mapping) -> Vec<String> {
        m.keys().filter_map(Value::as_str).map(str::to_string).collect()
    }

    #[test]
    fn test_absent_fields_preserved() {
        let mut fm = stored();
        let patch = PhotoPatch {
            title: Some("New".to_string()),
            ..Default::default()
        };
        apply_patch(&mut fm, &patch, "/images/old/img.avif").unwrap();

        assert_eq!(fm.get("title").and_then(Value::as_str), Some("New"));
        assert_eq!(fm.get("alt").and_then(Value::as_str), Some("Old alt"));
        assert_eq!(fm.get("camera_note").and_then(Value::as_str), Some("handheld"));
        assert_eq!(keys(&fm), vec!["title", "alt", "camera_note", "location", "srcPath"]);
    }

    #[test]
    fn test_nested_object_replaced_wholesale() {
        let mut fm = stored();
        let patch = PhotoPatch {
            location: Some(Location {
                name: "Auckland".to_string(),
                url: None,
                flag: None,
            }),
            ..Default::default()
        };
        apply_patch(&mut fm, &patch, "/images/old/img.avif").unwrap();

        let location = fm.get("location").and_then(Value::as_mapping).unwrap();
        assert_eq!(location.get("name").and_then(Value::as_str), Some("Auckland"));
        assert!(location.get("flag").is_none());
    }

    #[test]
    fn test_new_keys_appended_and_src_path_forced() {
        let mut fm = stored();
        let patch = PhotoPatch {
            slug: Some("renamed".to_string()),
            content: Some("body".to_string()),
            tags: Some(vec![PhotoTag::Travel]),
            src_path: Some("/elsewhere.avif".to_string()),
            ..Default::default()
        };
        apply_patch(&mut fm, &patch, "/images/renamed/img.avif").unwrap();

        assert_eq!(
            fm.get(SRC_PATH_KEY).and_then(Value::as_str),
            Some("/images/renamed/img.avif")
        );
        assert!(fm.get("slug").is_none());
        assert!(fm.get("content").is_none());
        assert_eq!(
            keys(&fm),
            vec!["title", "alt", "camera_note", "location", "srcPath", "tags"]
        );
    }
}
