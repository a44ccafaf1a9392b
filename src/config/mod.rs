//! Configuration for resume-cms
//!
//! The tool edits a sibling site checkout. Its location is resolved from,
//! highest precedence first:
//! - the `--site` flag or `RESUME_CMS_SITE` environment variable
//! - `site_root` in `resume-cms.yaml` in the current directory
//! - [`DEFAULT_SITE_ROOT`]
//!
//! ## Site Layout
//!
//! ```text
//! <site_root>/
//! ├── src/content/posts/<slug>.md     # Posts and projects
//! ├── src/content/spec/<name>.md      # skills, experience, about
//! └── public/assets/images/<folder>/  # Uploaded images
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::asset::DEFAULT_URL_PREFIX;
use crate::error::{Result, config};

/// Config filename looked up in the current directory
pub const CONFIG_FILE: &str = "resume-cms.yaml";

/// Site checkout used when nothing else is configured
pub const DEFAULT_SITE_ROOT: &str = "../cloud_resume";

pub const DEFAULT_POSTS_DIR: &str = "src/content/posts";
pub const DEFAULT_SPEC_DIR: &str = "src/content/spec";
pub const DEFAULT_ASSETS_DIR: &str = "public/assets/images";

/// Contents of `resume-cms.yaml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CmsConfig {
    pub site_root: Option<PathBuf>,
    pub posts_dir: Option<PathBuf>,
    pub spec_dir: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
    pub assets_url_prefix: Option<String>,
}

impl CmsConfig {
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Load the config file, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content, path)
    }
}

/// Resolved directories of the site being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub root: PathBuf,
    pub posts_dir: PathBuf,
    pub spec_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub assets_url_prefix: String,
}

impl SitePaths {
    /// Resolve paths from an explicit site root and the config file.
    ///
    /// A relative site root is resolved against `cwd`; relative
    /// directories against the site root.
    pub fn resolve(site_root: Option<PathBuf>, config: &CmsConfig, cwd: &Path) -> Self {
        let root = site_root
            .or_else(|| config.site_root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT));
        let root = cwd.join(root);

        let dir = |configured: &Option<PathBuf>, default: &str| {
            root.join(configured.as_deref().unwrap_or(Path::new(default)))
        };

        Self {
            posts_dir: dir(&config.posts_dir, DEFAULT_POSTS_DIR),
            spec_dir: dir(&config.spec_dir, DEFAULT_SPEC_DIR),
            assets_dir: dir(&config.assets_dir, DEFAULT_ASSETS_DIR),
            assets_url_prefix: config
                .assets_url_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_URL_PREFIX.to_string()),
            root,
        }
    }

    /// Default layout below `root`
    #[allow(dead_code)] // used in tests
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self::resolve(Some(root.into()), &CmsConfig::default(), Path::new(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_follow_site_layout() {
        let paths = SitePaths::resolve(None, &CmsConfig::default(), Path::new("/work/dashboard"));
        assert_eq!(paths.root, Path::new("/work/dashboard/../cloud_resume"));
        assert_eq!(
            paths.posts_dir,
            Path::new("/work/dashboard/../cloud_resume/src/content/posts")
        );
        assert_eq!(
            paths.spec_dir,
            Path::new("/work/dashboard/../cloud_resume/src/content/spec")
        );
        assert_eq!(
            paths.assets_dir,
            Path::new("/work/dashboard/../cloud_resume/public/assets/images")
        );
        assert_eq!(paths.assets_url_prefix, "/assets/images");
    }

    #[test]
    fn flag_beats_config_file() {
        let config = CmsConfig {
            site_root: Some(PathBuf::from("/from/config")),
            ..CmsConfig::default()
        };
        let paths = SitePaths::resolve(Some(PathBuf::from("/from/flag")), &config, Path::new("/cwd"));
        assert_eq!(paths.root, Path::new("/from/flag"));

        let paths = SitePaths::resolve(None, &config, Path::new("/cwd"));
        assert_eq!(paths.root, Path::new("/from/config"));
    }

    #[test]
    fn config_overrides_directories() {
        let config = CmsConfig::from_yaml(
            "site_root: site\nposts_dir: content/blog\nassets_dir: /srv/images\nassets_url_prefix: /img\n",
            Path::new(CONFIG_FILE),
        )
        .unwrap();
        let paths = SitePaths::resolve(None, &config, Path::new("/cwd"));

        assert_eq!(paths.posts_dir, Path::new("/cwd/site/content/blog"));
        assert_eq!(paths.spec_dir, Path::new("/cwd/site/src/content/spec"));
        assert_eq!(paths.assets_dir, Path::new("/srv/images"));
        assert_eq!(paths.assets_url_prefix, "/img");
    }

    #[test]
    fn missing_config_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = CmsConfig::load(&temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, CmsConfig::default());
    }

    #[test]
    fn empty_config_file_is_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(CmsConfig::load(&path).unwrap(), CmsConfig::default());
    }

    #[test]
    fn invalid_config_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "site_root: [unclosed\n").unwrap();

        let err = CmsConfig::load(&path).unwrap_err();
        assert!(matches!(err, crate::error::CmsError::ConfigParseFailed { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CmsConfig::from_yaml("post_dir: typo\n", Path::new(CONFIG_FILE)).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
