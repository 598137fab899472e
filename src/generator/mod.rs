//! Generator module - writes composed pages to the public directory

use anyhow::{Context as _, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::ContentRecord;
use crate::render;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Static site generator using the built-in Tera templates
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            blog: blog.clone(),
            renderer,
        })
    }

    /// Generate a page for every record, returning the written paths
    pub fn generate(&self, records: &[ContentRecord]) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.blog.public_dir)?;

        let mut written = Vec::with_capacity(records.len());
        for record in records {
            written.push(self.generate_record(record)?);
        }

        Ok(written)
    }

    /// Render one record and write it to `<public>/<id>/index.html`
    pub fn generate_record(&self, record: &ContentRecord) -> Result<PathBuf> {
        let html = self.render_html(record)?;

        let output_path = self.blog.public_dir.join(&record.id).join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(output_path)
    }

    /// Render one record to a complete HTML document
    pub fn render_html(&self, record: &ContentRecord) -> Result<String> {
        let config = &self.blog.config;
        let page = render::render(record, config);
        self.renderer
            .render_page(&page, config)
            .with_context(|| format!("Failed to render '{}'", record.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::FrontMatter;

    fn record(id: &str, category: Option<&str>) -> ContentRecord {
        let fm = FrontMatter {
            title: Some(id.to_string()),
            category: category.map(str::to_string),
            ..Default::default()
        };
        ContentRecord::new(id, format!("<p>{} body</p>", id), fm)
    }

    #[test]
    fn test_generate_writes_pages() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.comment.utterances = "org/repo".to_string();
        let blog = Blog::with_config(tmp.path(), config);

        let generator = Generator::new(&blog).unwrap();
        let written = generator
            .generate(&[record("first", None), record("about", Some("page"))])
            .unwrap();

        assert_eq!(written.len(), 2);
        let first = fs::read_to_string(blog.public_dir.join("first/index.html")).unwrap();
        assert!(first.contains("first body"));
        assert!(first.contains("utteranc.es"));

        let about = fs::read_to_string(blog.public_dir.join("about/index.html")).unwrap();
        assert!(about.contains("about body"));
        assert!(!about.contains("utteranc.es"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = Blog::with_config(tmp.path(), SiteConfig::default());
        let generator = Generator::new(&blog).unwrap();
        let rec = record("same", None);
        assert_eq!(
            generator.render_html(&rec).unwrap(),
            generator.render_html(&rec).unwrap()
        );
    }
}
