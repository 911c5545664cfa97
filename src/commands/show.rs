//! Show a single post

use anyhow::Result;
use std::io::Write;

use crate::helpers::{display_date, post_permalink};
use crate::Blog;

/// Print one post's metadata followed by its raw body
pub fn run<W: Write>(blog: &Blog, slug: &str, json: bool, out: &mut W) -> Result<()> {
    let Some(post) = blog.store().resolve_post(slug)? else {
        anyhow::bail!("Post not found: {}", slug);
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &post)?;
        writeln!(out)?;
        return Ok(());
    }

    let meta = &post.meta;
    writeln!(out, "{}", page_title(&meta.title, &blog.config.title))?;
    writeln!(out, "{}", display_date(&meta.date, &blog.config.date_format))?;
    if !meta.tags.is_empty() {
        writeln!(out, "tags: {}", meta.tags.join(", "))?;
    }
    if meta.draft {
        writeln!(out, "draft")?;
    }
    writeln!(out, "{}", post_permalink(&blog.config, &meta.slug))?;
    writeln!(out)?;
    write!(out, "{}", post.body)?;

    Ok(())
}

/// Title of a post's page, suffixed with the site title
pub fn page_title(title: &str, site_title: &str) -> String {
    if site_title.is_empty() {
        title.to_string()
    } else {
        format!("{} | {}", title, site_title)
    }
}
