//! Page composition - view model to an ordered list of regions

use serde::Serialize;

use super::view_model::PostViewModel;
use super::widget::ActiveWidget;
use crate::config::SiteConfig;
use crate::helpers::full_url_for;

/// One region of a composed page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "region", rename_all = "snake_case")]
pub enum Region {
    /// Document head metadata
    Head {
        title: String,
        description: String,
        /// Absolute URL of the featured image
        featured_image: Option<String>,
        url: String,
    },
    /// Title, date and author block
    TitleBlock {
        title: String,
        date: String,
        author: String,
    },
    Body {
        html: String,
    },
    Sponsor {
        sponsor_id: String,
    },
    PrimaryComment {
        short_name: String,
        site_url: String,
        slug: String,
    },
    SecondaryComment {
        repo: String,
    },
}

impl Region {
    /// Short region name, also the template partial used to render it
    pub fn name(&self) -> &'static str {
        match self {
            Region::Head { .. } => "head",
            Region::TitleBlock { .. } => "title",
            Region::Body { .. } => "body",
            Region::Sponsor { .. } => "sponsor",
            Region::PrimaryComment { .. } => "disqus",
            Region::SecondaryComment { .. } => "utterances",
        }
    }
}

impl From<&ActiveWidget> for Region {
    fn from(widget: &ActiveWidget) -> Self {
        match widget {
            ActiveWidget::Sponsor { sponsor_id } => Region::Sponsor {
                sponsor_id: sponsor_id.clone(),
            },
            ActiveWidget::PrimaryComment {
                short_name,
                site_url,
                slug,
            } => Region::PrimaryComment {
                short_name: short_name.clone(),
                site_url: site_url.clone(),
                slug: slug.clone(),
            },
            ActiveWidget::SecondaryComment { repo } => Region::SecondaryComment {
                repo: repo.clone(),
            },
        }
    }
}

/// A composed page: regions in presentation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub slug: String,
    /// Standalone page rather than a post
    pub standalone: bool,
    pub regions: Vec<Region>,
}

impl RenderedPage {
    pub fn region_names(&self) -> Vec<&'static str> {
        self.regions.iter().map(Region::name).collect()
    }

    /// The head region, always the first one
    pub fn head(&self) -> Option<&Region> {
        self.regions.first()
    }
}

/// Arrange a view model into regions
///
/// Order: head, title block (posts only), body, then widgets as sponsor,
/// primary comment, secondary comment regardless of the order they appear
/// in `vm.active_widgets`.
pub fn compose(vm: &PostViewModel, config: &SiteConfig) -> RenderedPage {
    let mut regions = Vec::with_capacity(3 + vm.active_widgets.len());

    regions.push(Region::Head {
        title: vm.title.clone(),
        description: vm.excerpt.clone(),
        featured_image: vm
            .featured_image
            .as_deref()
            .map(|path| full_url_for(config, path)),
        url: full_url_for(config, &format!("{}/", vm.slug)),
    });

    if vm.show_metadata {
        regions.push(Region::TitleBlock {
            title: vm.title.clone(),
            date: vm.date.clone(),
            author: vm.author.clone(),
        });
    }

    regions.push(Region::Body {
        html: vm.body.clone(),
    });

    let mut widgets: Vec<&ActiveWidget> = vm.active_widgets.iter().collect();
    widgets.sort_by_key(|w| w.kind());
    widgets.dedup_by_key(|w| w.kind());
    regions.extend(widgets.into_iter().map(Region::from));

    tracing::debug!("Composed '{}' into {} regions", vm.slug, regions.len());

    RenderedPage {
        slug: vm.slug.clone(),
        standalone: !vm.show_metadata,
        regions,
    }
}
