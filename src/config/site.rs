//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Loaded once at startup and passed by reference into every render.
/// Optional identifiers default to the empty string, which means the
/// corresponding feature is disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub introduction: String,
    pub site_url: String,
    pub icon: String,
    pub keywords: Vec<String>,

    // Social
    #[serde(default)]
    pub social: SocialConfig,
    pub email: String,

    // Widgets
    #[serde(default)]
    pub comment: CommentConfig,
    #[serde(default)]
    pub sponsor: SponsorConfig,
    #[serde(default)]
    pub share: ShareConfig,

    /// Google Analytics tracking ID
    pub ga: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My blog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            introduction: String::new(),
            site_url: "http://example.com".to_string(),
            icon: String::new(),
            keywords: Vec::new(),

            social: SocialConfig::default(),
            email: String::new(),

            comment: CommentConfig::default(),
            sponsor: SponsorConfig::default(),
            share: ShareConfig::default(),

            ga: String::new(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Social account handles shown on standalone pages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: String,
    pub github: String,
    pub medium: String,
    pub facebook: String,
    pub linkedin: String,
}

/// Comment widget configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentConfig {
    /// Disqus short name
    pub disqus_short_name: String,
    /// Utterances repository, `owner/repo`
    pub utterances: String,
}

/// Sponsor button configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SponsorConfig {
    pub buy_me_a_coffee_id: String,
}

/// Share configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareConfig {
    pub facebook_app_id: String,
}
