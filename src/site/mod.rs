//! The site being edited
//!
//! [`Site`] bundles the post store, the spec store and the asset uploader
//! and exposes the editing actions. Every action that changes content
//! returns the [`Revalidation`] of site pages whose cached render is now
//! stale.

mod revalidate;

use std::sync::Arc;

use crate::asset::{AssetUpload, AssetUploader};
use crate::certification::{
    self, Certification, SKILLS_SPEC, join_certifications, split_certifications,
};
use crate::config::SitePaths;
use crate::document::{Document, DocumentStore, FsStorage, Storage};
use crate::error::Result;
use crate::frontmatter::Frontmatter;

pub use revalidate::Revalidation;

/// Editing actions over posts, specs and assets
#[derive(Debug, Clone)]
pub struct Site {
    posts: DocumentStore,
    specs: DocumentStore,
    assets: AssetUploader,
}

impl Site {
    /// Open a site on the local filesystem.
    pub fn open(paths: &SitePaths) -> Self {
        Self::with_storage(paths, Arc::new(FsStorage))
    }

    pub fn with_storage(paths: &SitePaths, storage: Arc<dyn Storage>) -> Self {
        tracing::debug!(root = %paths.root.display(), "opening site");
        Self {
            posts: DocumentStore::new(&paths.posts_dir, storage.clone()),
            specs: DocumentStore::new(&paths.spec_dir, storage.clone()),
            assets: AssetUploader::new(&paths.assets_dir, paths.assets_url_prefix.as_str(), storage),
        }
    }

    pub fn posts(&self) -> &DocumentStore {
        &self.posts
    }

    /// All posts, newest first
    pub fn list_posts(&self) -> Result<Vec<Document>> {
        self.posts.list_all()
    }

    pub fn get_post(&self, slug: &str) -> Result<Option<Document>> {
        self.posts.get(slug)
    }

    pub fn save_post(&self, slug: &str, frontmatter: &Frontmatter, content: &str) -> Result<Revalidation> {
        self.posts.put(slug, frontmatter, content)?;
        Ok(Revalidation::post_saved(slug))
    }

    pub fn delete_post(&self, slug: &str) -> Result<Revalidation> {
        self.posts.delete(slug)?;
        Ok(Revalidation::post_deleted())
    }

    pub fn get_spec(&self, name: &str) -> Result<Option<Document>> {
        self.specs.get(name)
    }

    /// Overwrite a spec document. Pass an empty mapping to write it without
    /// front matter.
    pub fn save_spec(&self, name: &str, content: &str, frontmatter: &Frontmatter) -> Result<Revalidation> {
        self.specs.put(name, frontmatter, content)?;
        Ok(Revalidation::spec_saved(name))
    }

    /// Store an uploaded image and return its public path.
    pub fn upload_asset(&self, file: Option<AssetUpload>, folder: Option<&str>) -> Result<String> {
        self.assets.upload(file, folder)
    }

    /// Certifications listed in the skills spec. A missing spec has none.
    pub fn certifications(&self) -> Result<Vec<Certification>> {
        let Some(skills) = self.get_spec(SKILLS_SPEC)? else {
            return Ok(Vec::new());
        };
        let (_, certs_html) = split_certifications(&skills.content);
        Ok(certification::decode(&certs_html))
    }

    /// Rewrite the certifications block of the skills spec, keeping its
    /// free-form content and front matter.
    pub fn save_certifications(&self, certs: &[Certification]) -> Result<Revalidation> {
        let (content, frontmatter) = match self.get_spec(SKILLS_SPEC)? {
            Some(skills) => (split_certifications(&skills.content).0, skills.frontmatter),
            None => (String::new(), Frontmatter::new()),
        };
        let body = join_certifications(&content, &certification::encode(certs));
        self.save_spec(SKILLS_SPEC, &body, &frontmatter)
    }
}
