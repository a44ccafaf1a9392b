//! Certifications shown on the skills page
//!
//! Certifications are not stored as records. They live as an HTML fragment
//! of `cert-card` anchors at the end of the skills spec, after a
//! `# Certifications` heading. [`codec`] maps that fragment to and from a
//! list of [`Certification`]s and [`skills`] splits the spec body around the
//! heading.

pub mod codec;
pub mod skills;

use serde::{Deserialize, Serialize};

pub use codec::{decode, encode};
pub use skills::{SKILLS_SPEC, join_certifications, split_certifications};

/// One certification card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Position assigned when decoding; not persisted
    pub id: String,
    pub name: String,
    /// Credential link
    pub url: String,
    /// Root-relative logo path
    pub image: String,
}

impl Certification {
    pub fn new(name: impl Into<String>, url: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            url: url.into(),
            image: image.into(),
        }
    }

    /// Equal ignoring the id
    pub fn same_card(&self, other: &Self) -> bool {
        self.name == other.name && self.url == other.url && self.image == other.image
    }
}

/// Reassign positional ids (`0`, `1`, ...) after the list changed.
pub fn renumber(certs: &mut [Certification]) {
    for (index, cert) in certs.iter_mut().enumerate() {
        cert.id = index.to_string();
    }
}
