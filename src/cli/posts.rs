use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::document::fields::PostFields;

/// Arguments for posts command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List posts:\n    resume-cms posts list\n\n\
                  Create a post from a markdown file:\n    resume-cms posts new --title \"Hello World\" --body-file hello.md\n\n\
                  Change metadata:\n    resume-cms posts edit hello-world --tags rust,aws --no-draft\n\n\
                  Delete without confirmation:\n    resume-cms posts delete hello-world -y")]
pub struct PostsArgs {
    #[command(subcommand)]
    pub command: PostsSubcommand,
}

/// Posts subcommands
#[derive(Subcommand, Debug)]
pub enum PostsSubcommand {
    /// List posts, newest first
    List(ListPostsArgs),

    /// Print a post
    Show(ShowPostArgs),

    /// Create a new post
    New(NewPostArgs),

    /// Change a post's metadata or body
    Edit(EditPostArgs),

    /// Delete a post
    Delete(DeletePostArgs),
}

#[derive(Parser, Debug)]
pub struct ListPostsArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ShowPostArgs {
    /// Post slug
    pub slug: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct NewPostArgs {
    /// Slug to use instead of one derived from the title
    #[arg(long)]
    pub slug: Option<String>,

    #[command(flatten)]
    pub fields: PostFieldArgs,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Parser, Debug)]
pub struct EditPostArgs {
    /// Post slug
    pub slug: String,

    #[command(flatten)]
    pub fields: PostFieldArgs,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Parser, Debug)]
pub struct DeletePostArgs {
    /// Post slug
    pub slug: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Front matter fields shared by `posts new` and `posts edit`
#[derive(Args, Debug, Default)]
pub struct PostFieldArgs {
    /// Post title
    #[arg(long)]
    pub title: Option<String>,

    /// Short description
    #[arg(long)]
    pub description: Option<String>,

    /// Category
    #[arg(long)]
    pub category: Option<String>,

    /// Publish date (YYYY-MM-DD)
    #[arg(long)]
    pub published: Option<String>,

    /// Comma separated tags, replacing existing ones
    #[arg(long)]
    pub tags: Option<String>,

    /// Mark as draft
    #[arg(long, conflicts_with = "no_draft")]
    pub draft: bool,

    /// Mark as published (not a draft)
    #[arg(long)]
    pub no_draft: bool,

    /// Set any front matter field; the value is parsed as YAML
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

impl PostFieldArgs {
    pub fn to_fields(&self) -> PostFields {
        let draft = match (self.draft, self.no_draft) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        PostFields {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            published: self.published.clone(),
            tags: self.tags.clone(),
            draft,
            set: self.set.clone(),
        }
    }
}

/// Markdown body source
#[derive(Args, Debug, Default)]
pub struct BodyArgs {
    /// Body text
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the body from a file ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub body_file: Option<PathBuf>,
}
