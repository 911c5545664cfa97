//! Content store - discovers post units under a content root
//!
//! Each post lives in its own directory, named after the post's slug:
//!
//! ```text
//! content/posts/
//!   first-post/index.md
//!   second-post/second-post.md
//! ```
//!
//! Every call reads the filesystem from scratch; nothing is cached.

use chrono::Utc;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::error::ContentError;
use super::frontmatter::{self, HeaderBlock};
use super::post::sort_newest_first;
use super::{FrontMatter, Post, PostMetadata};
use crate::config::{DraftPolicy, Mode, SiteConfig};

/// Name of the preferred content file inside a unit directory
const INDEX_STEM: &str = "index";

/// Visibility and lookup settings for a [`ContentStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub mode: Mode,
    pub draft_policy: DraftPolicy,
    /// Extension of content files, without the dot
    pub extension: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Production,
            draft_policy: DraftPolicy::Unlisted,
            extension: "md".to_string(),
        }
    }
}

impl From<&SiteConfig> for StoreOptions {
    fn from(config: &SiteConfig) -> Self {
        Self {
            mode: config.mode,
            draft_policy: config.draft_policy,
            extension: config.markdown_ext.trim_start_matches('.').to_string(),
        }
    }
}

/// Read-only view over a directory of post units
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    options: StoreOptions,
}

impl ContentStore {
    /// Create a store over `root`
    pub fn new(root: impl Into<PathBuf>, options: StoreOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// List the metadata of every visible post, newest first
    ///
    /// Directories without a content file are not posts and are skipped, as
    /// are plain files. A unit with a malformed header is skipped with a
    /// warning. Drafts are left out unless running in development mode.
    /// A root that exists but is not a directory is an error.
    pub fn list_visible_posts(&self) -> Result<Vec<PostMetadata>, ContentError> {
        if !self.root.exists() {
            tracing::debug!("Content root {:?} does not exist", self.root);
            return Ok(Vec::new());
        }
        if !self.root.is_dir() {
            return Err(ContentError::io(
                &self.root,
                io::Error::new(io::ErrorKind::Other, "content root is not a directory"),
            ));
        }

        let now = Utc::now();
        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    let path = e.path().unwrap_or(&self.root).to_path_buf();
                    return Err(ContentError::io(path, e.into()));
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let Some(slug) = entry.file_name().to_str() else {
                tracing::debug!("Skipping non UTF-8 directory {:?}", entry.path());
                continue;
            };

            let Some(file) = self.locate_content_file(entry.path(), slug) else {
                tracing::debug!("No content file in {:?}", entry.path());
                continue;
            };

            let fm = match read_front_matter(&file) {
                Ok(fm) => fm,
                Err(e @ ContentError::FrontMatter { .. }) => {
                    tracing::warn!("Skipping post '{}': {}", slug, e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let meta = PostMetadata::from_front_matter(slug, fm, now);
            if !self.is_listed(&meta) {
                tracing::debug!("Hiding draft '{}'", slug);
                continue;
            }
            posts.push(meta);
        }

        sort_newest_first(&mut posts);

        tracing::debug!("Listed {} posts from {:?}", posts.len(), self.root);
        Ok(posts)
    }

    /// Resolve one post by slug, including its body
    ///
    /// Returns `Ok(None)` when no such unit exists or it has no content file.
    /// Drafts resolve unless the draft policy is [`DraftPolicy::Hidden`] and
    /// the store is not in development mode.
    pub fn resolve_post(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        validate_slug(slug)?;

        let unit = self.root.join(slug);
        if !unit.is_dir() {
            return Ok(None);
        }

        let Some(file) = self.locate_content_file(&unit, slug) else {
            return Ok(None);
        };

        let content = fs::read_to_string(&file).map_err(|e| ContentError::io(&file, e))?;
        let (fm, body) =
            FrontMatter::parse(&content).map_err(|e| ContentError::front_matter(&file, e))?;

        let meta = PostMetadata::from_front_matter(slug, fm, Utc::now());
        if !self.is_resolvable(&meta) {
            tracing::debug!("Draft '{}' is hidden by policy", slug);
            return Ok(None);
        }

        Ok(Some(Post::new(meta, body)))
    }

    /// Find the content file of a unit: `index.<ext>`, then `<slug>.<ext>`
    fn locate_content_file(&self, unit: &Path, slug: &str) -> Option<PathBuf> {
        let ext = &self.options.extension;
        [
            unit.join(format!("{}.{}", INDEX_STEM, ext)),
            unit.join(format!("{}.{}", slug, ext)),
        ]
        .into_iter()
        .find(|candidate| candidate.is_file())
    }

    fn is_listed(&self, meta: &PostMetadata) -> bool {
        !meta.draft || self.options.mode.shows_drafts()
    }

    fn is_resolvable(&self, meta: &PostMetadata) -> bool {
        match self.options.draft_policy {
            DraftPolicy::Unlisted => true,
            DraftPolicy::Hidden => self.is_listed(meta),
        }
    }
}

/// Reject slugs that are not a single plain path segment
pub fn validate_slug(slug: &str) -> Result<(), ContentError> {
    let invalid = || ContentError::InvalidSlug(slug.to_string());

    if slug.is_empty() || slug.contains(['/', '\\', '\0']) {
        return Err(invalid());
    }

    let mut components = Path::new(slug).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

/// Decode only the header of a content file
fn read_front_matter(path: &Path) -> Result<FrontMatter, ContentError> {
    let file = File::open(path).map_err(|e| ContentError::io(path, e))?;
    let block =
        frontmatter::read_header(BufReader::new(file)).map_err(|e| ContentError::io(path, e))?;

    match block {
        HeaderBlock::Absent => Ok(FrontMatter::default()),
        HeaderBlock::Present(header) => {
            FrontMatter::from_header(&header).map_err(|e| ContentError::front_matter(path, e))
        }
    }
}
