//! Third-party widget activation

use serde::Serialize;

use crate::config::SiteConfig;

/// Widget kinds in their fixed page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Sponsor,
    PrimaryComment,
    SecondaryComment,
}

/// A configured widget together with the identifiers it needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActiveWidget {
    /// Buy Me a Coffee button
    Sponsor { sponsor_id: String },

    /// Disqus thread
    PrimaryComment {
        short_name: String,
        site_url: String,
        slug: String,
    },

    /// Utterances thread backed by a GitHub repository
    SecondaryComment { repo: String },
}

impl ActiveWidget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            ActiveWidget::Sponsor { .. } => WidgetKind::Sponsor,
            ActiveWidget::PrimaryComment { .. } => WidgetKind::PrimaryComment,
            ActiveWidget::SecondaryComment { .. } => WidgetKind::SecondaryComment,
        }
    }
}

/// Decide which widgets are configured for the page at `slug`
///
/// A widget is active iff its identifier is non-empty. Both comment widgets
/// may be active at once. The result is in `WidgetKind` order. Category
/// filtering is the caller's job.
pub fn resolve(config: &SiteConfig, slug: &str) -> Vec<ActiveWidget> {
    let mut widgets = Vec::new();

    if !config.sponsor.buy_me_a_coffee_id.is_empty() {
        widgets.push(ActiveWidget::Sponsor {
            sponsor_id: config.sponsor.buy_me_a_coffee_id.clone(),
        });
    }

    if !config.comment.disqus_short_name.is_empty() {
        widgets.push(ActiveWidget::PrimaryComment {
            short_name: config.comment.disqus_short_name.clone(),
            site_url: config.site_url.clone(),
            slug: slug.to_string(),
        });
    }

    if !config.comment.utterances.is_empty() {
        widgets.push(ActiveWidget::SecondaryComment {
            repo: config.comment.utterances.clone(),
        });
    }

    widgets
}
