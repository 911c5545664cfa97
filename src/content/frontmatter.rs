//! Front-matter parsing
//!
//! A content file may open with a YAML header fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-01
//! tags: [a, b]
//! ---
//! Body text starts here.
//! ```
//!
//! A block that is never closed runs to the end of the file and leaves an
//! empty body. Field decoding is lenient: a value of the wrong shape is
//! treated as absent so that the defaults in
//! [`PostMetadata`](super::PostMetadata) apply.

use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::io::{self, BufRead};

use super::error::FrontMatterError;

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Raw header fields, each `None` when missing or unusable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub draft: Option<bool>,

    /// Keys this crate does not interpret
    pub extra: BTreeMap<String, Value>,
}

/// Outcome of reading only the header of a content file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderBlock {
    /// The file does not open with a delimiter line
    Absent,
    /// Text after the opening delimiter, up to the closing one or end of file
    Present(String),
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        match split(content) {
            (Some(header), body) => Ok((Self::from_header(header)?, body)),
            (None, body) => Ok((Self::default(), body)),
        }
    }

    /// Decode the YAML between the delimiters
    pub fn from_header(header: &str) -> Result<Self, FrontMatterError> {
        if header.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<Value>(header)? {
            Value::Mapping(mapping) => Ok(Self::from_mapping(mapping)),
            Value::Null => Ok(Self::default()),
            _ => Err(FrontMatterError::NotAMapping),
        }
    }

    /// Pick the known keys out of a decoded mapping
    pub fn from_mapping(mapping: Mapping) -> Self {
        let mut fm = Self::default();

        for (key, value) in mapping {
            let Some(key) = scalar_string(&key) else {
                tracing::debug!("Ignoring non-scalar front-matter key {:?}", key);
                continue;
            };

            match key.as_str() {
                "title" => fm.title = scalar_string(&value),
                "date" => fm.date = scalar_string(&value),
                "tags" => fm.tags = string_or_vec(&value),
                "description" => fm.description = scalar_string(&value),
                "draft" => fm.draft = flag(&value),
                _ => {
                    fm.extra.insert(key, value);
                }
            }
        }

        fm
    }
}

/// Split a content file into its header text and body
///
/// Exactly one line ending after the closing delimiter is consumed; the body
/// is everything after it, untouched. Without a closing delimiter the header
/// takes the rest of the file.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix(BOM).unwrap_or(content);

    let mut lines = content.split_inclusive('\n');
    let Some(first) = lines.next().filter(|line| is_delimiter(line)) else {
        return (None, content);
    };

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if is_delimiter(line) {
            let header = &content[header_start..offset];
            let body = &content[offset + line.len()..];
            return (Some(header), body);
        }
        offset += line.len();
    }

    (Some(&content[header_start..]), "")
}

/// Read the header of a content file without reading its body
pub fn read_header<R: BufRead>(mut reader: R) -> io::Result<HeaderBlock> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(HeaderBlock::Absent);
    }
    let first = line.strip_prefix(BOM).unwrap_or(&line);
    if !is_delimiter(first) {
        return Ok(HeaderBlock::Absent);
    }

    let mut header = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 || is_delimiter(&line) {
            return Ok(HeaderBlock::Present(header));
        }
        header.push_str(&line);
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Stringify a scalar; sequences, mappings and nulls have no string form
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Accept both a single string and a list of strings
fn string_or_vec(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Sequence(items) => Some(items.iter().filter_map(scalar_string).collect()),
        Value::Tagged(tagged) => string_or_vec(&tagged.value),
        Value::Null => None,
        other => scalar_string(other).map(|s| vec![s]),
    }
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        Value::Tagged(tagged) => flag(&tagged.value),
        _ => None,
    }
}
