use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoStoreError {
    /// Request payload failed schema validation
    #[error("invalid photo payload: {0}")]
    InvalidPatch(String),

    /// Computed srcPath does not start with '/'
    #[error("invalid srcPath: {0}")]
    InvalidSrcPath(String),

    #[error("photo not found: {0}")]
    NotFound(String),

    #[error("malformed frontmatter in {}: {source}", path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PhotoStoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn frontmatter(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Frontmatter {
            path: path.into(),
            source,
        }
    }
}

pub type PhotoResult<T> = Result<T, PhotoStoreError>;
