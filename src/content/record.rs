//! Content record model

use serde::{Deserialize, Serialize};

use super::FrontMatter;
use crate::helpers::{collapse_whitespace, decode_entities, prune, strip_html};

/// Maximum excerpt length, in characters
pub const EXCERPT_LENGTH: usize = 280;

/// One published document: rendered HTML body plus its front-matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Stable identifier (URL slug)
    pub id: String,

    /// Rendered HTML body
    pub html: String,

    /// Plain-text excerpt, at most `EXCERPT_LENGTH` characters
    pub excerpt: String,

    pub frontmatter: FrontMatter,
}

impl ContentRecord {
    /// Create a record, deriving the excerpt from the body
    pub fn new(id: impl Into<String>, html: impl Into<String>, frontmatter: FrontMatter) -> Self {
        let html = html.into();
        let excerpt = excerpt_from_html(&html, EXCERPT_LENGTH);
        Self {
            id: id.into(),
            html,
            excerpt,
            frontmatter,
        }
    }

    /// Title from front-matter, empty when absent
    pub fn title(&self) -> &str {
        self.frontmatter.title.as_deref().unwrap_or_default()
    }
}

/// Build a plain-text excerpt from rendered HTML
///
/// Entities are decoded after tags are gone, so `&lt;` never opens a tag.
pub fn excerpt_from_html(html: &str, length: usize) -> String {
    let text = collapse_whitespace(&decode_entities(&strip_html(html)));
    prune(&text, length, "…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_strips_markup() {
        let record = ContentRecord::new(
            "hello",
            "<h1>Hello</h1>\n<p>This is   <em>the</em> body.</p>",
            FrontMatter::default(),
        );
        assert_eq!(record.excerpt, "Hello This is the body.");
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let body = format!("<p>{}</p>", "word ".repeat(200));
        let record = ContentRecord::new("long", body, FrontMatter::default());
        assert!(record.excerpt.chars().count() <= EXCERPT_LENGTH);
        assert!(record.excerpt.ends_with('…'));
    }

    #[test]
    fn test_excerpt_decodes_entities() {
        let record = ContentRecord::new(
            "t",
            "<p>Tom &amp; Jerry &lt;3</p>",
            FrontMatter::default(),
        );
        assert_eq!(record.excerpt, "Tom & Jerry <3");
    }

    #[test]
    fn test_title() {
        let fm = FrontMatter {
            title: Some("Hello".to_string()),
            ..Default::default()
        };
        let record = ContentRecord::new("hello-world", "", fm);
        assert_eq!(record.title(), "Hello");
        assert_eq!(ContentRecord::new("x", "", FrontMatter::default()).title(), "");
    }
}
