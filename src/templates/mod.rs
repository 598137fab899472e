//! Built-in page templates using the Tera template engine
//!
//! Every region kind has its own partial under `regions/`; the layout wraps
//! the rendered regions without reordering them. All templates are embedded
//! in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{is_absolute, sponsor_url};
use crate::render::{EmailControl, Region, RenderedPage};

/// Template renderer with the embedded devblog theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Region bodies are already HTML; user strings are escaped explicitly
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("devblog/layout.html")),
            (
                "partials/contact.html",
                include_str!("devblog/partials/contact.html"),
            ),
            ("regions/head.html", include_str!("devblog/regions/head.html")),
            ("regions/title.html", include_str!("devblog/regions/title.html")),
            ("regions/body.html", include_str!("devblog/regions/body.html")),
            (
                "regions/sponsor.html",
                include_str!("devblog/regions/sponsor.html"),
            ),
            (
                "regions/disqus.html",
                include_str!("devblog/regions/disqus.html"),
            ),
            (
                "regions/utterances.html",
                include_str!("devblog/regions/utterances.html"),
            ),
        ])?;

        tera.register_filter("sponsor_url", sponsor_url_filter);
        tera.register_filter("attr", attr_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render a composed page to a complete HTML document
    ///
    /// The head region goes into `<head>`; all other regions are emitted
    /// into the body in the order the composer produced them.
    pub fn render_page(&self, page: &RenderedPage, config: &SiteConfig) -> Result<String> {
        let site = SiteData::from(config);

        let mut head = String::new();
        let mut regions = Vec::with_capacity(page.regions.len());
        for region in &page.regions {
            let html = self.render_region(region, &site)?;
            match region {
                Region::Head { .. } => head = html,
                _ => regions.push(html),
            }
        }

        let mut context = Context::new();
        context.insert("site", &site);
        context.insert("head", &head);
        context.insert("regions", &regions);
        // Standalone pages carry the contact footer; null elsewhere
        let contact = page.standalone.then(|| ContactData::from(config));
        context.insert("contact", &contact);

        self.render("layout.html", &context)
    }

    fn render_region(&self, region: &Region, site: &SiteData) -> Result<String> {
        let mut context = Context::new();
        context.insert("region", region);
        context.insert("site", site);

        if let Region::Head { description, .. } = region {
            let description = if description.is_empty() {
                &site.description
            } else {
                description
            };
            context.insert("description", description);
        }

        self.render(&format!("regions/{}.html", region.name()), &context)
    }
}

/// Tera filter: Buy Me a Coffee link for a sponsor id
fn sponsor_url_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let id = tera::try_get_value!("sponsor_url", "value", String, value);
    Ok(tera::Value::String(sponsor_url(&id)))
}

/// Tera filter: escape a value for a double-quoted attribute
///
/// Unlike `escape`, slashes are left alone so URLs stay readable.
fn attr_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("attr", "value", String, value);
    Ok(tera::Value::String(
        html_escape::encode_double_quoted_attribute(&s).into_owned(),
    ))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub icon: String,
    pub keywords: String,
    pub ga: String,
    pub facebook_app_id: String,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            icon: config.icon.clone(),
            keywords: config.keywords.join(", "),
            ga: config.ga.clone(),
            facebook_app_id: config.share.facebook_app_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactData {
    pub introduction: String,
    pub links: Vec<SocialLink>,
    pub email: Option<EmailControl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl From<&SiteConfig> for ContactData {
    fn from(config: &SiteConfig) -> Self {
        let social = &config.social;
        let accounts = [
            ("Github", "https://github.com/", social.github.as_str()),
            ("LinkedIn", "https://www.linkedin.com/in/", social.linkedin.as_str()),
            ("Twitter", "https://twitter.com/", social.twitter.as_str()),
            ("Medium", "https://medium.com/", social.medium.as_str()),
            ("Facebook", "https://www.facebook.com/", social.facebook.as_str()),
        ];

        let links = accounts
            .iter()
            .filter(|(_, _, handle)| !handle.is_empty())
            .map(|(name, base, handle)| SocialLink {
                name: name.to_string(),
                url: if is_absolute(handle) {
                    handle.to_string()
                } else {
                    format!("{}{}", base, handle.trim_start_matches('/'))
                },
            })
            .collect();

        Self {
            introduction: config.introduction.clone(),
            links,
            email: EmailControl::new(&config.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CommentConfig, SocialConfig, SponsorConfig};
    use crate::content::{ContentRecord, FrontMatter};
    use crate::render::render;

    fn config() -> SiteConfig {
        SiteConfig {
            title: "devAdvice blog".to_string(),
            site_url: "https://blog.example.io".to_string(),
            email: "me@example.com".to_string(),
            social: SocialConfig {
                github: "someone".to_string(),
                ..Default::default()
            },
            sponsor: SponsorConfig {
                buy_me_a_coffee_id: "me".to_string(),
            },
            comment: CommentConfig {
                disqus_short_name: "short".to_string(),
                utterances: "org/repo".to_string(),
            },
            ga: "UA-1-1".to_string(),
            ..Default::default()
        }
    }

    fn record(category: &str) -> ContentRecord {
        let fm = FrontMatter {
            title: Some("Hello <World>".to_string()),
            date: Some("January 15, 2024".to_string()),
            category: Some(category.to_string()),
            featured_image: Some("cover".to_string()),
            ..Default::default()
        };
        ContentRecord::new(
            "hello",
            r#"<img src="/img/cover-xyz.jpg"><p>Body text</p>"#,
            fm,
        )
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {:?} in output", needle))
    }

    #[test]
    fn test_render_post_page() {
        let config = config();
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_page(&render(&record("post"), &config), &config)
            .unwrap();

        assert!(html.contains("<title>Hello &lt;World&gt; | devAdvice blog</title>"));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://blog.example.io/img/cover-xyz.jpg">"#
        ));
        assert!(html.contains("gtag('config', 'UA-1-1')"));
        assert!(html.contains("https://www.buymeacoffee.com/me"));
        assert!(html.contains("https://short.disqus.com/embed.js"));
        assert!(html.contains(r#"this.page.url = "https://blog.example.io/hello/";"#));
        assert!(html.contains(r#"repo="org/repo""#));
        assert!(!html.contains("class=\"contact\""));

        let head_end = position(&html, "</head>");
        let title = position(&html, "post-title");
        let body = position(&html, "post-container");
        let sponsor = position(&html, "sponsor-button");
        let disqus = position(&html, "comments-disqus");
        let utterances = position(&html, "comments-utterances");
        assert!(position(&html, "og:title") < head_end);
        assert!(head_end < title);
        assert!(title < body && body < sponsor);
        assert!(sponsor < disqus && disqus < utterances);
    }

    #[test]
    fn test_render_standalone_page() {
        let config = config();
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_page(&render(&record("page"), &config), &config)
            .unwrap();

        assert!(!html.contains("post-title"));
        assert!(!html.contains("sponsor-button"));
        assert!(!html.contains("disqus"));
        assert!(!html.contains("utteranc.es"));
        assert!(html.contains("Body text"));
        assert!(html.contains(r#"href="https://github.com/someone""#));
        assert!(html.contains(r#"data-email="me@example.com""#));
        assert!(html.contains(">Email</span>"));
    }

    #[test]
    fn test_head_falls_back_to_site_description() {
        let mut config = config();
        config.description = "About software".to_string();
        let fm = FrontMatter {
            title: Some("Empty".to_string()),
            ..Default::default()
        };
        let record = ContentRecord::new("empty", "", fm);

        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_page(&render(&record, &config), &config)
            .unwrap();
        assert!(html.contains(r#"<meta name="description" content="About software">"#));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary">"#));
    }

    #[test]
    fn test_head_description_escaped_once() {
        let config = config();
        let fm = FrontMatter {
            title: Some("Cartoons".to_string()),
            ..Default::default()
        };
        let record = ContentRecord::new("t", "<p>Tom &amp; Jerry &lt;3</p>", fm);

        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_page(&render(&record, &config), &config)
            .unwrap();
        assert!(html.contains(r#"<meta name="description" content="Tom &amp; Jerry &lt;3">"#));
        assert!(html.contains(r#"<meta property="og:description" content="Tom &amp; Jerry &lt;3">"#));
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn test_unparsed_date_is_escaped() {
        let config = config();
        let mut record = record("post");
        record.frontmatter.date = Some("<b>x</b>".to_string());

        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_page(&render(&record, &config), &config)
            .unwrap();
        assert!(!html.contains("<b>x</b>"));
        assert!(html.contains("<time>&lt;b&gt;x"));
    }

    #[test]
    fn test_contact_and_icon_attributes_escaped() {
        let mut config = config();
        config.social.twitter = r#""><script>"#.to_string();
        config.icon = r#"/icon.png"onload="x"#.to_string();

        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_page(&render(&record("page"), &config), &config)
            .unwrap();
        assert!(!html.contains(r#""><script>"#));
        assert!(html.contains(r#"href="https://twitter.com/&quot;"#));
        assert!(html.contains(r#"<link rel="icon" href="/icon.png&quot;onload=&quot;x">"#));
    }

    #[test]
    fn test_contact_links() {
        let mut config = SiteConfig::default();
        config.social.linkedin = "https://www.linkedin.com/in/someone/".to_string();
        config.social.twitter = "handle".to_string();

        let contact = ContactData::from(&config);
        assert_eq!(
            contact.links,
            vec![
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/someone/".to_string(),
                },
                SocialLink {
                    name: "Twitter".to_string(),
                    url: "https://twitter.com/handle".to_string(),
                },
            ]
        );
        assert!(contact.email.is_none());
    }
}
