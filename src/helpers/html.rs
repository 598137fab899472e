//! HTML and text helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => {
                in_tag = true;
                // Tags separate words
                result.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Decode HTML entities (`&amp;`, `&lt;`, `&#39;`, ...) into plain text
pub fn decode_entities(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Shorten text to at most `length` characters, cutting on a word boundary
///
/// # Examples
/// ```ignore
/// prune("Hello brave new world", 12, "…") // -> "Hello brave…"
/// ```
pub fn prune(s: &str, length: usize, omission: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }

    let budget = length.saturating_sub(omission.chars().count());
    let head: String = s.chars().take(budget).collect();
    let next = s.chars().nth(budget);

    let cut = match next {
        Some(c) if !c.is_whitespace() => match head.rfind(char::is_whitespace) {
            Some(pos) => &head[..pos],
            None => head.as_str(),
        },
        _ => head.as_str(),
    };

    format!("{}{}", cut.trim_end(), omission)
}
