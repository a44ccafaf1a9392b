//! Storage backends for documents and assets
//!
//! [`FsStorage`] talks to the real filesystem. Tests substitute
//! `MemoryStorage`, which keeps files in a map keyed by path.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Flat file storage keyed by path.
pub trait Storage: Send + Sync {
    /// File names directly inside `dir`, sorted by name. A missing
    /// directory yields an empty list.
    fn list(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Read a text file. `None` if it does not exist. Invalid UTF-8 is
    /// replaced with U+FFFD rather than failing the read.
    fn read(&self, path: &Path) -> io::Result<Option<String>>;

    /// Create or overwrite a file, creating parent directories as needed.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Remove a file. Removing a missing file succeeds.
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Storage on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::other)?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(decode_text(path, bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        match std::fs::remove_file(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// Decode file contents as UTF-8, replacing invalid sequences.
fn decode_text(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;
