//! Content loader - loads rendered documents from the content directory

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::{ContentRecord, FrontMatter};
use crate::Blog;

/// Errors raised while turning a content file into a record
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{path:?}: front-matter has no title")]
    MissingTitle { path: PathBuf },

    #[error("{path:?}: id '{id}' is already used by another document")]
    DuplicateId { path: PathBuf, id: String },
}

/// A supplier of content records, queried by id
pub trait ContentSource {
    /// All records, newest first
    fn records(&self) -> Result<Vec<ContentRecord>>;

    /// Look up a single record by id
    fn get(&self, id: &str) -> Result<Option<ContentRecord>> {
        Ok(self.records()?.into_iter().find(|r| r.id == id))
    }
}

/// Records held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<ContentRecord>,
}

impl InMemorySource {
    pub fn new(mut records: Vec<ContentRecord>) -> Self {
        sort_newest_first(&mut records);
        Self { records }
    }
}

impl ContentSource for InMemorySource {
    fn records(&self) -> Result<Vec<ContentRecord>> {
        Ok(self.records.clone())
    }
}

/// Loads content from the content directory
///
/// Each `.html` file holds YAML front-matter followed by an already
/// rendered HTML body.
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load a single record from a file
    fn load_record(&self, path: &Path) -> Result<ContentRecord> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        if fm.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
            return Err(ContentError::MissingTitle {
                path: path.to_path_buf(),
            }
            .into());
        }

        // Normalise the date once so every consumer sees the display form
        let mut fm = fm;
        if fm.date.is_some() {
            fm.date = Some(fm.display_date());
        }

        let id = record_id(path);
        Ok(ContentRecord::new(id, body.trim_end(), fm))
    }
}

impl ContentSource for ContentLoader<'_> {
    fn records(&self) -> Result<Vec<ContentRecord>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let mut seen = HashSet::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_html_file(path) {
                continue;
            }

            match self.load_record(path) {
                Ok(record) => {
                    if !seen.insert(record.id.clone()) {
                        let err = ContentError::DuplicateId {
                            path: path.to_path_buf(),
                            id: record.id,
                        };
                        tracing::warn!("Skipping document: {}", err);
                        continue;
                    }
                    tracing::debug!("Loaded {:?} as '{}'", path, record.id);
                    records.push(record);
                }
                Err(e) => {
                    tracing::warn!("Failed to load document {:?}: {}", path, e);
                }
            }
        }

        sort_newest_first(&mut records);
        Ok(records)
    }
}

/// Sort by date descending; undated records go last, ties by id
fn sort_newest_first(records: &mut [ContentRecord]) {
    records.sort_by(|a, b| {
        let da = a.frontmatter.parse_date();
        let db = b.frontmatter.parse_date();
        db.cmp(&da).then_with(|| a.id.cmp(&b.id))
    });
}

/// Derive a record id from its file name
fn record_id(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");
    slug::slugify(stem)
}

/// Check if a file is a rendered HTML document
fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}
