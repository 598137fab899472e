//! Generate static files

use anyhow::Result;

use crate::content::{ContentLoader, ContentSource};
use crate::generator::Generator;
use crate::Blog;

/// Generate the static site
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(blog);
    let records = loader.records()?;
    let pages = records.iter().filter(|r| r.frontmatter.is_page()).count();

    tracing::info!(
        "Loaded {} posts and {} pages",
        records.len() - pages,
        pages
    );

    let generator = Generator::new(blog)?;
    let written = generator.generate(&records)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} files in {:.2}s",
        written.len(),
        duration.as_secs_f64()
    );

    Ok(())
}
