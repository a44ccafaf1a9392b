//! Markdown document store
//!
//! A [`DocumentStore`] manages the `*.md` files of one directory. Each file
//! is a [`Document`] addressed by its slug, the file name without the `.md`
//! extension. The site uses one store for posts and one for spec documents.
//!
//! Writes are whole-file overwrites with no locking: two concurrent saves of
//! the same document race and the last writer wins.

pub mod fields;
pub mod slug;
pub mod storage;

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Result, document};
use crate::frontmatter::{self, Frontmatter};

pub use slug::{slugify, validate_name};
pub use storage::{FsStorage, Storage};

/// Document file extension
pub const EXTENSION: &str = "md";

/// Front matter key used to order listings
pub const PUBLISHED_KEY: &str = "published";

/// A markdown document with YAML front matter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// File name without extension
    pub slug: String,
    pub frontmatter: Frontmatter,
    /// Markdown body
    pub content: String,
}

impl Document {
    /// String value of a front matter field
    pub fn field(&self, key: &str) -> Option<String> {
        frontmatter::get_str(&self.frontmatter, key)
    }
}

/// Documents stored as `<dir>/<slug>.md`
#[derive(Clone)]
pub struct DocumentStore {
    dir: PathBuf,
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

impl DocumentStore {
    pub fn new(dir: impl Into<PathBuf>, storage: Arc<dyn Storage>) -> Self {
        Self {
            dir: dir.into(),
            storage,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `slug`
    pub fn path_for(&self, slug: &str) -> Result<PathBuf> {
        validate_name(slug)?;
        Ok(self.dir.join(format!("{slug}.{EXTENSION}")))
    }

    /// All documents in the directory, newest `published` first.
    ///
    /// A missing directory yields an empty list. Documents without a
    /// `published` value sort after dated ones; ties keep file name order.
    pub fn list_all(&self) -> Result<Vec<Document>> {
        let names = self
            .storage
            .list(&self.dir)
            .map_err(|e| crate::error::fs::list_failed(self.dir.display().to_string(), e.to_string()))?;

        let mut documents = Vec::new();
        for name in names {
            let Some(slug) = name.strip_suffix(&format!(".{EXTENSION}")) else {
                continue;
            };
            if validate_name(slug).is_err() {
                tracing::warn!(file = %name, "skipping document with unusable name");
                continue;
            }
            // A file removed between listing and reading is skipped.
            if let Some(doc) = self.get(slug)? {
                documents.push(doc);
            }
        }

        documents.sort_by(compare_published_desc);
        tracing::debug!(dir = %self.dir.display(), count = documents.len(), "listed documents");
        Ok(documents)
    }

    /// The document named `slug`, or `None` if it does not exist.
    pub fn get(&self, slug: &str) -> Result<Option<Document>> {
        let path = self.path_for(slug)?;
        let content = self
            .storage
            .read(&path)
            .map_err(|e| document::read_failed(path.display().to_string(), e.to_string()))?;

        Ok(content.map(|text| {
            let (frontmatter, content) = frontmatter::parse(&text);
            Document {
                slug: slug.to_string(),
                frontmatter,
                content,
            }
        }))
    }

    /// Create or fully overwrite the document named `slug`.
    ///
    /// The file is written in place, so a crash mid-write can leave it
    /// truncated.
    pub fn put(&self, slug: &str, frontmatter: &Frontmatter, content: &str) -> Result<()> {
        let path = self.path_for(slug)?;
        let text = frontmatter::serialize(content, frontmatter)?;
        self.storage
            .write(&path, text.as_bytes())
            .map_err(|e| document::write_failed(path.display().to_string(), e.to_string()))?;
        tracing::info!(path = %path.display(), "saved document");
        Ok(())
    }

    /// Remove the document named `slug`. Missing documents are ignored.
    pub fn delete(&self, slug: &str) -> Result<()> {
        let path = self.path_for(slug)?;
        self.storage
            .remove(&path)
            .map_err(|e| document::delete_failed(path.display().to_string(), e.to_string()))?;
        tracing::info!(path = %path.display(), "deleted document");
        Ok(())
    }
}

fn compare_published_desc(a: &Document, b: &Document) -> Ordering {
    // None < Some, so reversing puts undated documents last
    b.field(PUBLISHED_KEY).cmp(&a.field(PUBLISHED_KEY))
}
