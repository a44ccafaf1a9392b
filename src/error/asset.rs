//! Asset upload errors

use super::CmsError;

/// Creates an asset write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> CmsError {
    CmsError::AssetWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
