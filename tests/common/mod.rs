//! Common test utilities for resume-cms integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway site checkout with the default layout
#[allow(dead_code)]
pub struct TestSite {
    /// Temporary directory holding the site and the working directory
    pub temp: TempDir,
    /// Site root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestSite {
    /// Create an empty site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("site");
        std::fs::create_dir_all(&path).expect("Failed to create site directory");
        Self { temp, path }
    }

    /// Write a file relative to the site root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the site root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists relative to the site root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a post with front matter
    pub fn write_post(&self, slug: &str, frontmatter: &str, body: &str) {
        self.write_file(
            &format!("src/content/posts/{slug}.md"),
            &format!("---\n{frontmatter}\n---\n\n{body}"),
        );
    }

    /// Write a spec document with front matter
    pub fn write_spec(&self, name: &str, frontmatter: &str, body: &str) {
        self.write_file(
            &format!("src/content/spec/{name}.md"),
            &format!("---\n{frontmatter}\n---\n\n{body}"),
        );
    }

    /// Write a file outside the site (e.g. something to upload)
    pub fn write_outside(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Command pointed at this site, run from the temp directory
    pub fn cmd(&self) -> Command {
        let mut cmd = resume_cms_cmd();
        cmd.current_dir(self.temp.path()).arg("--site").arg(&self.path);
        cmd
    }
}

/// The resume-cms binary with developer overrides removed
#[allow(deprecated)]
pub fn resume_cms_cmd() -> Command {
    let mut cmd = Command::cargo_bin("resume-cms").expect("binary is built");
    cmd.env_remove("RESUME_CMS_SITE").env_remove("RUST_LOG");
    cmd
}
