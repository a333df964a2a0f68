use std::env;
use std::path::{Path, PathBuf};

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_HOST: &str = "BIND_HOST";
    /// Directory holding one `<slug>.md` per photo
    pub const METADATA_DIR: &str = "PHOTOS_METADATA_DIR";
    /// Directory holding one `<slug>/` image directory per photo.
    /// Defaults to the metadata directory when unset.
    pub const ASSET_DIR: &str = "PHOTOS_ASSET_DIR";
    /// URL prefix written into each photo's `srcPath`
    pub const IMAGE_BASE_PATH: &str = "PHOTOS_IMAGE_BASE_PATH";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3001;
    pub const BIND_HOST: &str = "127.0.0.1";
    pub const METADATA_DIR: &str = "content/photography";
    pub const IMAGE_BASE_PATH: &str = "/images";
    /// File name of the image inside each per-slug asset directory
    pub const ASSET_FILE_NAME: &str = "img.avif";
    pub const MARKDOWN_EXT: &str = "md";
}

/// Where photo metadata and images live, and how image URLs are formed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoStoreConfig {
    pub metadata_dir: PathBuf,
    pub asset_dir: PathBuf,
    pub image_base_path: String,
}

impl PhotoStoreConfig {
    pub fn new(
        metadata_dir: impl Into<PathBuf>,
        asset_dir: impl Into<PathBuf>,
        image_base_path: impl Into<String>,
    ) -> Self {
        Self {
            metadata_dir: metadata_dir.into(),
            asset_dir: asset_dir.into(),
            image_base_path: image_base_path.into(),
        }
    }

    pub fn from_env() -> Self {
        let metadata_dir = env::var(env_vars::METADATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::METADATA_DIR));
        let asset_dir = env::var(env_vars::ASSET_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| metadata_dir.clone());
        let image_base_path = env::var(env_vars::IMAGE_BASE_PATH)
            .unwrap_or_else(|_| defaults::IMAGE_BASE_PATH.to_string());

        Self {
            metadata_dir,
            asset_dir,
            image_base_path,
        }
    }

    /// `<metadata_dir>/<slug>.md`
    pub fn markdown_path(&self, slug: &str) -> PathBuf {
        self.metadata_dir
            .join(format!("{}.{}", slug, defaults::MARKDOWN_EXT))
    }

    /// `<asset_dir>/<slug>/`
    pub fn asset_dir_for(&self, slug: &str) -> PathBuf {
        self.asset_dir.join(slug)
    }

    /// Public image path recorded as `srcPath` for a slug
    pub fn src_path_for(&self, slug: &str) -> String {
        format!(
            "{}/{}/{}",
            self.image_base_path.trim_end_matches('/'),
            slug,
            defaults::ASSET_FILE_NAME
        )
    }

    /// Create the metadata and asset directories if they are missing
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for dir in [&self.metadata_dir, &self.asset_dir] {
            if !Path::new(dir).exists() {
                std::fs::create_dir_all(dir)?;
                log::info!("[PHOTOS] Created directory {}", dir.display());
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_host: String,
    pub store: PhotoStoreConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var(env_vars::PORT) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid PORT '{}', falling back to {}", raw, defaults::PORT);
                defaults::PORT
            }),
            Err(_) => defaults::PORT,
        };

        Self {
            port,
            bind_host: env::var(env_vars::BIND_HOST)
                .unwrap_or_else(|_| defaults::BIND_HOST.to_string()),
            store: PhotoStoreConfig::from_env(),
        }
    }
}
