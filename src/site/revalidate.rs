//! Pages to re-render after an edit

use std::fmt;

/// Site routes whose rendered pages are stale after an action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Revalidation {
    paths: Vec<String>,
}

impl Revalidation {
    pub fn post_saved(slug: &str) -> Self {
        Self {
            paths: vec!["/posts".to_string(), format!("/posts/{slug}")],
        }
    }

    pub fn post_deleted() -> Self {
        Self {
            paths: vec!["/posts".to_string()],
        }
    }

    pub fn spec_saved(name: &str) -> Self {
        Self {
            paths: vec![format!("/specs/{name}")],
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

impl fmt::Display for Revalidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paths.join(", "))
    }
}
