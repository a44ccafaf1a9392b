//! Document errors

use super::CmsError;

/// Creates an invalid name error
pub fn invalid_name(name: impl Into<String>) -> CmsError {
    CmsError::InvalidName { name: name.into() }
}

/// Creates a post not found error
pub fn post_not_found(slug: impl Into<String>) -> CmsError {
    CmsError::PostNotFound { slug: slug.into() }
}

/// Creates a spec not found error
pub fn spec_not_found(name: impl Into<String>) -> CmsError {
    CmsError::SpecNotFound { name: name.into() }
}

pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> CmsError {
    CmsError::DocumentReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> CmsError {
    CmsError::DocumentWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn delete_failed(path: impl Into<String>, reason: impl Into<String>) -> CmsError {
    CmsError::DocumentDeleteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
