//! Configuration errors

use super::CmsError;

pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> CmsError {
    CmsError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CmsError {
    CmsError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
