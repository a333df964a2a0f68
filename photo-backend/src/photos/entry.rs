//! A photo as read from disk: its slug plus the raw frontmatter.
//!
//! Reads are not checked against the write schema. Any well-formed YAML
//! mapping is returned as-is, so hand-written or partially filled files
//! still list and open.

use photo_types::PhotoDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::{Mapping, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoEntry {
    /// Filename stem; overrides any `slug` key in the frontmatter
    pub slug: String,
    pub frontmatter: Mapping,
}

impl PhotoEntry {
    pub fn new(slug: impl Into<String>, frontmatter: Mapping) -> Self {
        Self {
            slug: slug.into(),
            frontmatter,
        }
    }

    /// Sort key. Missing or unparseable dates sort after every dated photo.
    pub fn date(&self) -> Option<PhotoDate> {
        match self.frontmatter.get("date")? {
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl Serialize for PhotoEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("slug", &self.slug)?;
        for (key, value) in &self.frontmatter {
            if key.as_str() == Some("slug") {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
