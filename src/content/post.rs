//! Post metadata and full post models

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Serialize;
use serde_yaml::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::FrontMatter;

/// Listing-level information about a post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostMetadata {
    /// Directory name of the post unit; never read from the file
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as written in the header
    pub date: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Short summary for listings
    pub description: String,

    /// Whether the post is a draft
    pub draft: bool,

    /// Custom front-matter fields
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

/// A post with its raw markdown body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMetadata,

    /// Raw markdown content after the front-matter block
    pub body: String,
}

impl PostMetadata {
    /// Apply the per-field defaults to a decoded header
    ///
    /// `now` is used when the header carries no date. Blank titles and dates
    /// count as missing. The result depends only on the arguments.
    pub fn from_front_matter(slug: &str, fm: FrontMatter, now: DateTime<Utc>) -> Self {
        Self {
            slug: slug.to_string(),
            title: non_blank(fm.title).unwrap_or_else(|| slug.to_string()),
            date: non_blank(fm.date)
                .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            tags: fm.tags.unwrap_or_default(),
            description: fm.description.unwrap_or_default(),
            draft: fm.draft.unwrap_or(false),
            extra: fm.extra,
        }
    }

    /// Parse the date string into an absolute instant
    pub fn published_at(&self) -> Option<DateTime<Local>> {
        parse_date_string(&self.date)
    }
}

impl Post {
    pub fn new(meta: PostMetadata, body: impl Into<String>) -> Self {
        Self {
            meta,
            body: body.into(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Sort newest first
///
/// Posts whose date cannot be parsed go after every dated post. Equal keys
/// keep their input order.
pub fn sort_newest_first(posts: &mut Vec<PostMetadata>) {
    let mut keyed: Vec<_> = posts
        .drain(..)
        .map(|post| (post.published_at(), post))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    posts.extend(keyed.into_iter().map(|(_, post)| post));
}

/// Parse a date string in various formats
///
/// Strings without an offset are read as local time.
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap()
    }

    fn meta(slug: &str, date: &str) -> PostMetadata {
        let fm = FrontMatter {
            date: Some(date.to_string()),
            ..Default::default()
        };
        PostMetadata::from_front_matter(slug, fm, fixed_now())
    }

    #[test]
    fn test_defaults_for_empty_header() {
        let meta = PostMetadata::from_front_matter("my-post", FrontMatter::default(), fixed_now());
        assert_eq!(meta.slug, "my-post");
        assert_eq!(meta.title, "my-post");
        assert_eq!(meta.date, "2025-03-04T05:06:07.000Z");
        assert!(meta.tags.is_empty());
        assert_eq!(meta.description, "");
        assert!(!meta.draft);
    }

    #[test]
    fn test_header_values_win_over_defaults() {
        let fm = FrontMatter {
            title: Some("Hello".to_string()),
            date: Some("2024-01-01".to_string()),
            tags: Some(vec!["a".to_string(), "b".to_string()]),
            description: Some("Intro".to_string()),
            draft: Some(true),
            ..Default::default()
        };
        let meta = PostMetadata::from_front_matter("hello", fm, fixed_now());
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.date, "2024-01-01");
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert_eq!(meta.description, "Intro");
        assert!(meta.draft);
    }

    #[test]
    fn test_blank_title_and_date_use_defaults() {
        let fm = FrontMatter {
            title: Some(String::new()),
            date: Some("  ".to_string()),
            ..Default::default()
        };
        let meta = PostMetadata::from_front_matter("empty-vals", fm, fixed_now());
        assert_eq!(meta.title, "empty-vals");
        assert_eq!(meta.date, "2025-03-04T05:06:07.000Z");
        assert_eq!(meta.published_at().unwrap(), fixed_now());
    }

    #[test]
    fn test_default_date_parses() {
        let meta = PostMetadata::from_front_matter("x", FrontMatter::default(), fixed_now());
        assert_eq!(meta.published_at().unwrap(), fixed_now());
    }

    #[test]
    fn test_parse_date_formats() {
        let date_only = parse_date_string("2024-01-15").unwrap();
        assert_eq!(date_only.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 00:00");

        let slashed = parse_date_string("2024/01/15 10:30:00").unwrap();
        assert_eq!(slashed.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 10:30");

        let zoned = parse_date_string("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(zoned, Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap());

        let rfc2822 = parse_date_string("Mon, 15 Jan 2024 10:30:00 +0000").unwrap();
        assert_eq!(rfc2822, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());

        assert!(parse_date_string("not a date").is_none());
        assert!(parse_date_string("2024-13-45").is_none());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            meta("first-post", "2024-01-01"),
            meta("second-post", "2024-06-01"),
            meta("middle", "2024-03-15 12:00:00"),
        ];
        sort_newest_first(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["second-post", "middle", "first-post"]);
    }

    #[test]
    fn test_unparseable_dates_sort_last_in_input_order() {
        let mut posts = vec![
            meta("bad-a", "someday"),
            meta("old", "2020-01-01"),
            meta("bad-b", "yesterday-ish"),
            meta("new", "2023-01-01"),
        ];
        sort_newest_first(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old", "bad-a", "bad-b"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut posts = vec![
            meta("b", "2024-01-01"),
            meta("a", "2024-01-01"),
            meta("c", "2024-01-01"),
        ];
        sort_newest_first(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c"]);
    }
}
