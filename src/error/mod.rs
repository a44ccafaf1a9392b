//! Error types and handling for resume-cms
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`document`]: Post and spec document errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`asset`]: Asset upload errors

pub mod asset;
pub mod config;
pub mod document;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for resume-cms operations
#[derive(Error, Diagnostic, Debug)]
pub enum CmsError {
    // Document errors
    #[error("Invalid document name: '{name}'")]
    #[diagnostic(
        code(resume_cms::document::invalid_name),
        help("Names must be non-empty and must not contain path separators or start with '.'")
    )]
    InvalidName { name: String },

    #[error("Post '{slug}' not found")]
    #[diagnostic(
        code(resume_cms::document::post_not_found),
        help("Run 'resume-cms posts list' to see available posts")
    )]
    PostNotFound { slug: String },

    #[error("Post '{slug}' already exists")]
    #[diagnostic(
        code(resume_cms::document::post_exists),
        help("Use 'resume-cms posts edit' to change an existing post, or pass --slug")
    )]
    PostExists { slug: String },

    #[error("Spec '{name}' not found")]
    #[diagnostic(
        code(resume_cms::document::spec_not_found),
        help("Spec documents are skills, experience and about")
    )]
    SpecNotFound { name: String },

    #[error("Failed to read document: {path}: {reason}")]
    #[diagnostic(code(resume_cms::document::read_failed))]
    DocumentReadFailed { path: String, reason: String },

    #[error("Failed to write document: {path}: {reason}")]
    #[diagnostic(code(resume_cms::document::write_failed))]
    DocumentWriteFailed { path: String, reason: String },

    #[error("Failed to delete document: {path}: {reason}")]
    #[diagnostic(code(resume_cms::document::delete_failed))]
    DocumentDeleteFailed { path: String, reason: String },

    #[error("Nothing to save for '{name}'")]
    #[diagnostic(
        code(resume_cms::document::nothing_to_save),
        help("Pass --body, --body-file or --set")
    )]
    NothingToSave { name: String },

    #[error("Invalid date: '{value}'")]
    #[diagnostic(
        code(resume_cms::document::invalid_date),
        help("Use YYYY-MM-DD or an RFC 3339 timestamp")
    )]
    InvalidDate { value: String },

    #[error("Invalid field assignment: '{input}'")]
    #[diagnostic(
        code(resume_cms::document::invalid_field),
        help("Use key=value, for example --set category=cloud")
    )]
    InvalidFieldAssignment { input: String },

    // Certification errors
    #[error("Certification '{id}' not found")]
    #[diagnostic(
        code(resume_cms::certification::not_found),
        help("Run 'resume-cms certs list' to see certification ids")
    )]
    CertificationNotFound { id: String },

    // Asset errors
    #[error("No file uploaded")]
    #[diagnostic(code(resume_cms::asset::no_payload))]
    NoUploadPayload,

    #[error("Failed to write asset: {path}: {reason}")]
    #[diagnostic(code(resume_cms::asset::write_failed))]
    AssetWriteFailed { path: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(resume_cms::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(resume_cms::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(resume_cms::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(code(resume_cms::fs::list_failed))]
    DirectoryReadFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(resume_cms::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(resume_cms::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CmsError {
    fn from(err: std::io::Error) -> Self {
        CmsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CmsError {
    fn from(err: serde_yaml::Error) -> Self {
        CmsError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CmsError {
    fn from(err: serde_json::Error) -> Self {
        CmsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for CmsError {
    fn from(err: inquire::InquireError) -> Self {
        CmsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CmsError>;
