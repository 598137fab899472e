//! List site content

use anyhow::Result;

use crate::content::{ContentLoader, ContentSource};
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let records = ContentLoader::new(blog).records()?;

    match content_type {
        "post" | "posts" => {
            let posts: Vec<_> = records.iter().filter(|r| !r.frontmatter.is_page()).collect();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.frontmatter.date.as_deref().unwrap_or("undated"),
                    post.title(),
                    post.id
                );
            }
        }
        "page" | "pages" => {
            let pages: Vec<_> = records.iter().filter(|r| r.frontmatter.is_page()).collect();
            println!("Pages ({}):", pages.len());
            for page in pages {
                println!("  {} [{}]", page.title(), page.id);
            }
        }
        "widget" | "widgets" => {
            let widgets = crate::render::resolve(&blog.config, "");
            println!("Widgets ({}):", widgets.len());
            for widget in widgets {
                println!("  {:?}", widget.kind());
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, widget",
                content_type
            );
        }
    }

    Ok(())
}
