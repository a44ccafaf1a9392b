//! File system errors

use super::CmsError;

pub fn list_failed(path: impl Into<String>, reason: impl Into<String>) -> CmsError {
    CmsError::DirectoryReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> CmsError {
    CmsError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> CmsError {
    CmsError::IoError {
        message: message.into(),
    }
}
