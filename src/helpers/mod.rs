//! Helper functions shared by the loader and the templates

mod html;
mod url;

pub use html::*;
pub use url::*;
