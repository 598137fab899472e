//! URL helper functions

use crate::config::SiteConfig;

/// Generate a full URL including the domain
///
/// Absolute URLs (`http://`, `https://`, `//`) are returned unchanged.
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about/") // -> "https://example.com/about/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }

    let base = config.site_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Whether a URL already carries a scheme or is protocol-relative
pub fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Encode a single URL path segment
pub fn encode_url(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment, percent_encoding::NON_ALPHANUMERIC).to_string()
}

/// Buy Me a Coffee profile link for a sponsor id
pub fn sponsor_url(sponsor_id: &str) -> String {
    format!("https://www.buymeacoffee.com/{}", encode_url(sponsor_id))
}
