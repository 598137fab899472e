//! Content module - documents, front-matter, and the content source

mod frontmatter;
pub mod loader;
mod record;

pub use frontmatter::{FrontMatter, PAGE_CATEGORY};
pub use loader::{ContentError, ContentLoader, ContentSource, InMemorySource};
pub use record::{excerpt_from_html, ContentRecord, EXCERPT_LENGTH};
