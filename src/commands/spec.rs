//! Spec command implementation

use crate::certification::{SKILLS_SPEC, join_certifications, split_certifications};
use crate::cli::{SaveSpecArgs, ShowSpecArgs, SpecArgs, SpecSubcommand};
use crate::document::fields::parse_assignment;
use crate::error::{CmsError, Result, document};
use crate::frontmatter::Frontmatter;
use crate::site::Site;

use super::helpers::{read_body, report_revalidation};
use super::posts::print_document;

/// Run spec command
pub fn run(site: &Site, args: SpecArgs) -> Result<()> {
    match args.command {
        SpecSubcommand::Show(args) => show_spec(site, &args),
        SpecSubcommand::Save(args) => save_spec(site, &args),
    }
}

fn show_spec(site: &Site, args: &ShowSpecArgs) -> Result<()> {
    let spec = site
        .get_spec(&args.name)?
        .ok_or_else(|| document::spec_not_found(&args.name))?;

    if args.content_only {
        let content = if args.name == SKILLS_SPEC {
            split_certifications(&spec.content).0
        } else {
            spec.content
        };
        println!("{}", content.trim_end());
        return Ok(());
    }

    print_document(&spec, args.json)
}

fn save_spec(site: &Site, args: &SaveSpecArgs) -> Result<()> {
    let existing = site.get_spec(&args.name)?;
    let body = read_body(&args.body)?;

    let mut frontmatter = match &existing {
        Some(spec) if !args.no_frontmatter => spec.frontmatter.clone(),
        _ => Frontmatter::new(),
    };
    for assignment in &args.set {
        let (key, value) = parse_assignment(assignment)?;
        frontmatter.insert(key.into(), value);
    }

    let existing_content = existing.map(|spec| spec.content).unwrap_or_default();
    let content = match body {
        Some(body) if args.name == SKILLS_SPEC && !args.raw => {
            let (_, certs_html) = split_certifications(&existing_content);
            join_certifications(body.trim(), &certs_html)
        }
        Some(body) => body,
        None if args.set.is_empty() && !args.no_frontmatter => {
            return Err(CmsError::NothingToSave {
                name: args.name.clone(),
            });
        }
        None => existing_content,
    };

    let revalidation = site.save_spec(&args.name, &content, &frontmatter)?;
    report_revalidation(&revalidation);
    println!("Saved spec '{}'", args.name);
    Ok(())
}
