//! Rendering pipeline
//!
//! ```text
//! ContentRecord + SiteConfig -> build -> PostViewModel -> compose -> RenderedPage
//! ```
//!
//! Everything here is pure: no I/O, no shared mutable state. Renders can run
//! in any order or in parallel against the same `SiteConfig`.

pub mod composer;
pub mod image;
pub mod reveal;
pub mod view_model;
pub mod widget;

pub use composer::{compose, Region, RenderedPage};
pub use image::locate;
pub use reveal::{EmailControl, EmailReveal};
pub use view_model::{build, PostViewModel};
pub use widget::{resolve, ActiveWidget, WidgetKind};

use crate::config::SiteConfig;
use crate::content::ContentRecord;

/// Build and compose a record in one step
pub fn render(record: &ContentRecord, config: &SiteConfig) -> RenderedPage {
    compose(&build(record, config), config)
}
