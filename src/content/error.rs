//! Errors raised while reading post units

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to split or decode a front-matter header
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("front-matter must be a mapping of keys to values")]
    NotAMapping,

    #[error("invalid YAML in front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors surfaced by the content store
///
/// A missing post is not an error: lookups return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid post identifier {0:?}")]
    InvalidSlug(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed front-matter in {}: {source}", path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn front_matter(path: impl Into<PathBuf>, source: FrontMatterError) -> Self {
        Self::FrontMatter {
            path: path.into(),
            source,
        }
    }
}
