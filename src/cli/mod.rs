//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - posts: Post commands and shared field arguments
//! - spec: Spec document commands
//! - certs: Certification commands
//! - upload: Upload command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod certs;
pub mod completions;
pub mod posts;
pub mod spec;
pub mod upload;

pub use certs::{CertsArgs, CertsSubcommand};
pub use completions::CompletionsArgs;
pub use posts::{
    BodyArgs, DeletePostArgs, EditPostArgs, ListPostsArgs, NewPostArgs, PostsArgs,
    PostsSubcommand, ShowPostArgs,
};
pub use spec::{SaveSpecArgs, ShowSpecArgs, SpecArgs, SpecSubcommand};
pub use upload::UploadArgs;

/// resume-cms - content manager for a markdown resume site
#[derive(Parser, Debug)]
#[command(
    name = "resume-cms",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Content manager for a markdown resume site",
    long_about = "resume-cms edits the posts, spec documents (skills, experience, about) and \
                  image assets of a static resume site. Documents are markdown files with \
                  YAML front matter.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  resume-cms posts list                          \x1b[90m# List posts, newest first\x1b[0m\n   \
                  resume-cms posts new --title \"Hello World\"     \x1b[90m# Create posts/hello-world.md\x1b[0m\n   \
                  resume-cms posts edit hello-world --draft      \x1b[90m# Mark a post as draft\x1b[0m\n   \
                  resume-cms spec show skills                    \x1b[90m# Print the skills document\x1b[0m\n   \
                  resume-cms certs add --name AWS --url URL      \x1b[90m# Add a certification card\x1b[0m\n   \
                  resume-cms upload ./logo.png --folder posts    \x1b[90m# Upload an image\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Site checkout to edit (defaults to ../cloud_resume)
    #[arg(long, short = 's', global = true, env = "RESUME_CMS_SITE")]
    pub site: Option<PathBuf>,

    /// Config file (defaults to ./resume-cms.yaml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, edit, list and delete posts
    Posts(PostsArgs),

    /// Show and edit spec documents (skills, experience, about)
    Spec(SpecArgs),

    /// Manage certifications on the skills page
    Certs(CertsArgs),

    /// Upload an image into the site's assets
    Upload(UploadArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
