//! Presentation helpers for consumers of the content store
//!
//! Display dates and post URLs are built here so that listing and detail
//! views agree on them.

mod date;
mod url;

pub use date::*;
pub use url::*;
