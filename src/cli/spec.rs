use clap::{Parser, Subcommand};

use super::BodyArgs;

/// Arguments for spec command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the about page:\n    resume-cms spec show about\n\n\
                  Replace the experience page body:\n    resume-cms spec save experience --body-file experience.md\n\n\
                  Replace the skills text, keeping certifications:\n    resume-cms spec save skills --body-file skills.md")]
pub struct SpecArgs {
    #[command(subcommand)]
    pub command: SpecSubcommand,
}

/// Spec subcommands
#[derive(Subcommand, Debug)]
pub enum SpecSubcommand {
    /// Print a spec document
    Show(ShowSpecArgs),

    /// Replace a spec document's body
    Save(SaveSpecArgs),
}

#[derive(Parser, Debug)]
pub struct ShowSpecArgs {
    /// Spec name (skills, experience, about)
    pub name: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the body, without the certifications block
    #[arg(long, conflicts_with = "json")]
    pub content_only: bool,
}

#[derive(Parser, Debug)]
pub struct SaveSpecArgs {
    /// Spec name (skills, experience, about)
    pub name: String,

    #[command(flatten)]
    pub body: BodyArgs,

    /// Set a front matter field; the value is parsed as YAML
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Drop the existing front matter
    #[arg(long)]
    pub no_frontmatter: bool,

    /// Write the body as given, even for skills (replaces certifications)
    #[arg(long)]
    pub raw: bool,
}
