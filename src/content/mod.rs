//! Content module - post units, front-matter and the content store

mod error;
pub mod frontmatter;
mod post;
mod store;

pub use error::{ContentError, FrontMatterError};
pub use frontmatter::FrontMatter;
pub use post::{parse_date_string, sort_newest_first, Post, PostMetadata};
pub use store::{validate_slug, ContentStore, StoreOptions};
