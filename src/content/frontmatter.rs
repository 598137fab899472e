//! Front-matter parsing

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category value that marks a standalone page rather than a post
pub const PAGE_CATEGORY: &str = "page";

/// Front-matter data from a content file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    /// Bare image filename, no directory and no extension
    pub featured_image: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A horizontal rule at the top of a body is not front-matter
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => Ok((fm, remaining)),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                Ok((FrontMatter::default(), content))
            }
        }
    }

    /// Whether this document is a standalone page
    pub fn is_page(&self) -> bool {
        self.category.as_deref() == Some(PAGE_CATEGORY)
    }

    /// Parse the date string into a timestamp
    pub fn parse_date(&self) -> Option<NaiveDateTime> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }

    /// Date in display form, e.g. "January 15, 2024"
    ///
    /// Dates that cannot be parsed are passed through verbatim.
    pub fn display_date(&self) -> String {
        match self.parse_date() {
            Some(dt) => dt.format("%B %d, %Y").to_string(),
            None => self.date.clone().unwrap_or_default(),
        }
    }
}

/// Check for a `key: value` line
fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }
    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };
    let key = &trimmed[..colon_pos];
    let is_valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && key != "http"
        && key != "https";
    let after_colon = &trimmed[colon_pos + 1..];
    is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15 10:30:00
author: Jane
category: aws
featuredImage: cover
---

<p>This is the content.</p>
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert_eq!(fm.author.as_deref(), Some("Jane"));
        assert_eq!(fm.category.as_deref(), Some("aws"));
        assert_eq!(fm.featured_image.as_deref(), Some("cover"));
        assert!(!fm.is_page());
        assert!(remaining.starts_with("<p>This is the content.</p>"));
    }

    #[test]
    fn test_page_category() {
        let content = "---\ntitle: about\ncategory: page\n---\n<p>Hi</p>";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_page());
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("<p>Just a body</p>").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "<p>Just a body</p>");
    }

    #[test]
    fn test_horizontal_rule_not_yaml() {
        let content = "---\n\nSee https://example.com for details\n\n---\n<p>More</p>";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("https://example.com"));
    }

    #[test]
    fn test_display_date() {
        let fm = FrontMatter {
            date: Some("2024-01-15 10:30:00".to_string()),
            ..Default::default()
        };
        assert_eq!(fm.display_date(), "January 15, 2024");

        let fm = FrontMatter {
            date: Some("2019/07/04".to_string()),
            ..Default::default()
        };
        assert_eq!(fm.display_date(), "July 04, 2019");
    }

    #[test]
    fn test_display_date_passthrough() {
        let fm = FrontMatter {
            date: Some("sometime in spring".to_string()),
            ..Default::default()
        };
        assert_eq!(fm.display_date(), "sometime in spring");
        assert_eq!(FrontMatter::default().display_date(), "");
    }
}
