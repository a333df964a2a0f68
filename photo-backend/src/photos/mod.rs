//! Photo metadata store — markdown files with YAML frontmatter, one per slug.
//!
//! Each photo is `<metadata_dir>/<slug>.md` plus an image directory
//! `<asset_dir>/<slug>/`. Updates may change the slug, which relocates both.

pub mod entry;
pub mod file_ops;
pub mod frontmatter;
pub mod merge;
pub mod rename;
pub mod store;

pub use store::PhotoStore;
