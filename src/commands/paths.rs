//! Print the page path of every visible post

use anyhow::Result;
use std::io::Write;

use crate::helpers::post_path;
use crate::Blog;

/// One line per post, in listing order
pub fn run<W: Write>(blog: &Blog, out: &mut W) -> Result<()> {
    for post in blog.store().list_visible_posts()? {
        writeln!(out, "{}", post_path(&blog.config, &post.slug))?;
    }
    Ok(())
}
