//! Document names and slug generation

use crate::error::{Result, document::invalid_name};

/// Check that a slug or spec name maps to a single file inside its
/// directory.
pub fn validate_name(name: &str) -> Result<()> {
    let is_valid = !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0']);

    if is_valid {
        Ok(())
    } else {
        Err(invalid_name(name))
    }
}

/// Derive a post slug from its title.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-`, and trims leading and trailing dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}
