//! resume-cms - content manager for a markdown resume site
//!
//! Edits the posts and spec documents (skills, experience, about) of a
//! sibling static site and uploads images into its asset folder. Documents
//! are markdown files with YAML front matter.

use clap::Parser;

mod asset;
mod certification;
mod cli;
mod commands;
mod config;
mod document;
mod error;
mod frontmatter;
mod logging;
mod site;

use cli::{Cli, Commands};
use error::Result;

fn run(cli: Cli) -> Result<()> {
    let open_site = || commands::helpers::open_site(cli.site.clone(), cli.config.clone());

    match cli.command {
        Commands::Posts(args) => commands::posts::run(&open_site()?, args),
        Commands::Spec(args) => commands::spec::run(&open_site()?, args),
        Commands::Certs(args) => commands::certs::run(&open_site()?, args),
        Commands::Upload(args) => commands::upload::run(&open_site()?, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
