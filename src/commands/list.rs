//! List visible posts

use anyhow::Result;
use std::io::Write;

use crate::helpers::{display_date, post_path};
use crate::Blog;

/// Print every visible post, newest first
pub fn run<W: Write>(blog: &Blog, json: bool, out: &mut W) -> Result<()> {
    let posts = blog.store().list_visible_posts()?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &posts)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Posts ({}):", posts.len())?;
    for post in &posts {
        let draft = if post.draft { " (draft)" } else { "" };
        writeln!(
            out,
            "  {} - {}{} [{}]",
            display_date(&post.date, &blog.config.date_format),
            post.title,
            draft,
            post_path(&blog.config, &post.slug)
        )?;
        if !post.description.is_empty() {
            writeln!(out, "      {}", post.description)?;
        }
        if !post.tags.is_empty() {
            writeln!(out, "      tags: {}", post.tags.join(", "))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::sample_blog;
    use crate::config::Mode;
    use tempfile::TempDir;

    fn output(blog: &Blog, json: bool) -> String {
        let mut out = Vec::new();
        run(blog, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_text() {
        let tmp = TempDir::new().unwrap();
        let blog = sample_blog(tmp.path());

        let text = output(&blog, false);
        assert!(text.starts_with("Posts (2):\n"));
        let second = text.find("June 1, 2024 - Second Post [/posts/second-post/]").unwrap();
        let first = text.find("January 1, 2024 - First Post [/posts/first-post/]").unwrap();
        assert!(second < first);
        assert!(text.contains("tags: intro"));
        assert!(!text.contains("Draft"));
    }

    #[test]
    fn test_list_development_shows_drafts() {
        let tmp = TempDir::new().unwrap();
        let mut blog = sample_blog(tmp.path());
        blog.set_mode(Mode::Development);

        let text = output(&blog, false);
        assert!(text.starts_with("Posts (3):\n"));
        assert!(text.contains("Draft (draft)"));
    }

    #[test]
    fn test_list_json() {
        let tmp = TempDir::new().unwrap();
        let blog = sample_blog(tmp.path());

        let value: serde_json::Value = serde_json::from_str(&output(&blog, true)).unwrap();
        let posts = value.as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["slug"], "second-post");
        assert_eq!(posts[0]["description"], "More");
        assert_eq!(posts[1]["tags"], serde_json::json!(["intro"]));
    }
}
