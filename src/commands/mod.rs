//! Command implementations for resume-cms CLI

pub mod certs;
pub mod completions;
pub mod helpers;
pub mod posts;
pub mod spec;
pub mod upload;
pub mod version;
