//! Featured image lookup inside rendered HTML

use regex::Regex;

/// Length of the `src="` prefix skipped in the result
const SRC_PREFIX_LEN: usize = 5;

/// Find the path of a featured image inside rendered HTML
///
/// `bare_filename` is the front-matter value: no directory, no extension
/// (`"banner"`, not `"banner.png"`). The upstream renderer rewrites image
/// paths (hash prefixes, static directories), so the full path is recovered
/// from the first `src="..."` attribute containing the filename, optionally
/// followed by a renderer-added suffix (`cover-xyz`), then an alphabetic
/// extension of two to four letters.
///
/// Returns `None` when the filename is empty or when either search fails.
/// The end of the path is the first bare `name.ext` in the document, so an
/// image wrapped in a link to the same file (`<a href=".../banner.png">`)
/// is a miss.
///
/// # Examples
/// ```ignore
/// locate(r#"<img src="/static/abc123-banner.png">"#, "banner")
/// // -> Some("/static/abc123-banner.png")
/// ```
pub fn locate(html: &str, bare_filename: &str) -> Option<String> {
    if bare_filename.is_empty() {
        return None;
    }

    let name = regex::escape(bare_filename);
    let file_pattern = format!(r#"{}[^"'\s/]*?\.[a-zA-Z]{{2,4}}"#, name);
    let anchor = Regex::new(&format!(r#"src="[^"]*?{}"#, file_pattern)).ok()?;
    let file = Regex::new(&file_pattern).ok()?;

    let start = anchor.find(html)?.start() + SRC_PREFIX_LEN;
    let end = file.find(html)?.end();

    // The bare occurrence may precede the anchor; that is a miss, not a slice
    html.get(start..end).map(str::to_string)
}
