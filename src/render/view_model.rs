//! Post view model

use serde::Serialize;

use super::image::locate;
use super::widget::{resolve, ActiveWidget};
use crate::config::SiteConfig;
use crate::content::ContentRecord;

/// Render-ready representation of one document
///
/// Built fresh for every render and dropped after composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostViewModel {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub author: String,
    pub excerpt: String,
    pub body: String,
    /// Path of the featured image as embedded in `body`
    pub featured_image: Option<String>,
    /// False for standalone pages (`category: page`)
    pub show_metadata: bool,
    pub active_widgets: Vec<ActiveWidget>,
}

/// Build the view model for a record
pub fn build(record: &ContentRecord, config: &SiteConfig) -> PostViewModel {
    let fm = &record.frontmatter;

    let featured_image = fm
        .featured_image
        .as_deref()
        .and_then(|name| locate(&record.html, name));

    let show_metadata = !fm.is_page();

    let active_widgets = if show_metadata {
        resolve(config, &record.id)
    } else {
        Vec::new()
    };

    PostViewModel {
        slug: record.id.clone(),
        title: record.title().to_string(),
        date: fm.date.clone().unwrap_or_default(),
        author: fm.author.clone().unwrap_or_else(|| config.author.clone()),
        excerpt: record.excerpt.clone(),
        body: record.html.clone(),
        featured_image,
        show_metadata,
        active_widgets,
    }
}
