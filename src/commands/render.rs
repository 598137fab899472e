//! Show how a single document is composed

use anyhow::{anyhow, Result};
use clap::ValueEnum;

use crate::content::{ContentLoader, ContentSource};
use crate::generator::Generator;
use crate::render;
use crate::Blog;

/// Output format of the render command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// One region name per line
    Regions,
    /// The composed page as JSON
    Json,
    /// The final HTML document
    Html,
}

/// Render the document with the given id and return the output text
pub fn render_to_string(blog: &Blog, id: &str, format: RenderFormat) -> Result<String> {
    let record = ContentLoader::new(blog)
        .get(id)?
        .ok_or_else(|| anyhow!("No document with id '{}'", id))?;

    let output = match format {
        RenderFormat::Regions => {
            let page = render::render(&record, &blog.config);
            page.region_names().join("\n")
        }
        RenderFormat::Json => {
            let page = render::render(&record, &blog.config);
            serde_json::to_string_pretty(&page)?
        }
        RenderFormat::Html => Generator::new(blog)?.render_html(&record)?,
    };

    Ok(output)
}

/// Print the rendered document
pub fn run(blog: &Blog, id: &str, format: RenderFormat) -> Result<()> {
    println!("{}", render_to_string(blog, id, format)?);
    Ok(())
}
