//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/posts/") // -> "/blog/posts/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Encode a slug as one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Site-relative path of a post's page
///
/// # Examples
/// ```ignore
/// post_path(&config, "hello-world") // -> "/posts/hello-world/"
/// ```
pub fn post_path(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &post_route(config, slug))
}

/// Absolute permalink of a post's page
pub fn post_permalink(config: &SiteConfig, slug: &str) -> String {
    full_url_for(config, &post_route(config, slug))
}

/// Path of a post's page below the site root
fn post_route(config: &SiteConfig, slug: &str) -> String {
    let dir = config.post_dir.trim_matches('/');
    let slug = encode_segment(slug);
    if dir.is_empty() {
        format!("{}/", slug)
    } else {
        format!("{}/{}/", dir, slug)
    }
}
