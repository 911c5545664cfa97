//! blog-content: a file-backed content repository for a static blog
//!
//! Posts live as one directory per post under a content root. This crate
//! discovers them, extracts their front-matter, hides drafts outside
//! development, orders them newest first and resolves single posts by slug.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use config::Mode;
use content::{ContentStore, StoreOptions};

/// The blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root holding one directory per post
    pub content_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Override the execution context from the configuration
    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
    }

    /// Content store over this blog's content root
    pub fn store(&self) -> ContentStore {
        ContentStore::new(&self.content_dir, StoreOptions::from(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.content_dir, tmp.path().join("content/posts"));
        assert_eq!(blog.store().options().mode, Mode::Production);
    }

    #[test]
    fn test_config_file_and_mode_override() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "content_dir: posts\nmarkdown_ext: .markdown\n",
        )
        .unwrap();

        let mut blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.store().root(), tmp.path().join("posts"));
        assert_eq!(blog.store().options().extension, "markdown");

        blog.set_mode(Mode::Development);
        assert_eq!(blog.store().options().mode, Mode::Development);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("_config.yml"), "mode: staging\n").unwrap();
        assert!(Blog::new(tmp.path()).is_err());
    }
}
