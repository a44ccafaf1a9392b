//! Image uploads into the site's public asset folder
//!
//! Uploads land in `<assets_dir>/<folder>/<sanitized-name>` and are
//! referenced from documents as `<url_prefix>/<folder>/<sanitized-name>`.
//! Names are not made unique: uploading two files whose names sanitize to
//! the same value overwrites the first.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::document::Storage;
use crate::error::{CmsError, Result, asset};

/// Public URL prefix of the asset root
pub const DEFAULT_URL_PREFIX: &str = "/assets/images";

/// Allowed upload folders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetFolder {
    #[default]
    Certificates,
    Posts,
}

impl AssetFolder {
    pub const ALL: [AssetFolder; 2] = [AssetFolder::Certificates, AssetFolder::Posts];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetFolder::Certificates => "certificates",
            AssetFolder::Posts => "posts",
        }
    }

    /// Map a folder name to an allowed folder.
    ///
    /// Unknown names fall back to [`AssetFolder::Certificates`] instead of
    /// failing. Callers passing a wrong folder are not told.
    pub fn coerce(name: Option<&str>) -> Self {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return Self::default();
        };
        match Self::ALL.into_iter().find(|folder| folder.as_str() == name) {
            Some(folder) => folder,
            None => {
                tracing::warn!(folder = name, "unknown asset folder, using certificates");
                Self::default()
            }
        }
    }
}

impl fmt::Display for AssetFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Make an uploaded file name safe to write.
///
/// Every character outside `[A-Za-z0-9.]` becomes `_` (one per UTF-16 unit,
/// so characters outside the basic plane become `__`), then the result is
/// lowercased. Extensions are not checked.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '.' {
            out.push(c.to_ascii_lowercase());
        } else {
            out.extend(std::iter::repeat_n('_', c.len_utf16()));
        }
    }
    out
}

/// A file received for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUpload {
    /// Name as given by the client
    pub name: String,
    pub bytes: Vec<u8>,
}

impl AssetUpload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Writes uploads below the asset root
#[derive(Clone)]
pub struct AssetUploader {
    root: PathBuf,
    url_prefix: String,
    storage: Arc<dyn Storage>,
}

impl fmt::Debug for AssetUploader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetUploader")
            .field("root", &self.root)
            .field("url_prefix", &self.url_prefix)
            .finish_non_exhaustive()
    }
}

impl AssetUploader {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>, storage: Arc<dyn Storage>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
            storage,
        }
    }

    /// Store an upload and return its root-relative public path.
    ///
    /// A missing file is rejected; an unknown folder is coerced to
    /// `certificates`. The payload is written as-is without checking that it
    /// is an image.
    pub fn upload(&self, file: Option<AssetUpload>, folder: Option<&str>) -> Result<String> {
        let file = file.ok_or(CmsError::NoUploadPayload)?;
        let folder = AssetFolder::coerce(folder);
        let filename = sanitize_filename(&file.name);

        let target = self.root.join(folder.as_str()).join(&filename);
        self.storage
            .write(&target, &file.bytes)
            .map_err(|e| asset::write_failed(target.display().to_string(), e.to_string()))?;

        tracing::info!(
            path = %target.display(),
            bytes = file.bytes.len(),
            "uploaded asset"
        );
        Ok(format!("{}/{folder}/{filename}", self.url_prefix))
    }
}
