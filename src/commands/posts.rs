//! Posts command implementation
//!
//! Lists, prints, creates, edits and deletes posts. Edits read the post,
//! overlay the changed fields and write the whole file back.

use chrono::Utc;
use console::Style;
use inquire::Confirm;

use crate::cli::{
    DeletePostArgs, EditPostArgs, ListPostsArgs, NewPostArgs, PostsArgs, PostsSubcommand,
    ShowPostArgs,
};
use crate::document::fields::{PostFields, new_post_frontmatter};
use crate::document::{Document, PUBLISHED_KEY, slugify, validate_name};
use crate::error::{CmsError, Result, document};
use crate::frontmatter;
use crate::site::Site;

use super::helpers::{read_body, report_revalidation};

/// Run posts command
pub fn run(site: &Site, args: PostsArgs) -> Result<()> {
    match args.command {
        PostsSubcommand::List(args) => list_posts(site, &args),
        PostsSubcommand::Show(args) => show_post(site, &args),
        PostsSubcommand::New(args) => new_post(site, &args),
        PostsSubcommand::Edit(args) => edit_post(site, &args),
        PostsSubcommand::Delete(args) => delete_post(site, &args),
    }
}

fn list_posts(site: &Site, args: &ListPostsArgs) -> Result<()> {
    let posts = site.list_posts()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    if posts.is_empty() {
        println!("No posts found in {}", site.posts().dir().display());
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    println!();
    for post in &posts {
        display_post_summary(post);
    }
    Ok(())
}

fn display_post_summary(post: &Document) {
    let draft = post.field("draft").is_some_and(|d| d == "true");
    let marker = if draft {
        format!(" {}", Style::new().dim().apply_to("(draft)"))
    } else {
        String::new()
    };

    println!("  {}{marker}", Style::new().bold().yellow().apply_to(&post.slug));
    if let Some(title) = post.field("title") {
        println!("    {} {title}", Style::new().bold().apply_to("Title:"));
    }
    if let Some(published) = post.field(PUBLISHED_KEY) {
        println!("    {} {published}", Style::new().bold().apply_to("Published:"));
    }
}

fn show_post(site: &Site, args: &ShowPostArgs) -> Result<()> {
    let post = site
        .get_post(&args.slug)?
        .ok_or_else(|| document::post_not_found(&args.slug))?;
    print_document(&post, args.json)
}

/// Print a document as stored on disk, or as JSON
pub(super) fn print_document(doc: &Document, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(doc)?);
    } else {
        print!("{}", frontmatter::serialize(&doc.content, &doc.frontmatter)?);
        if !doc.content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn new_post(site: &Site, args: &NewPostArgs) -> Result<()> {
    let fields = args.fields.to_fields();
    let title = fields.title.clone().unwrap_or_default();
    let slug = match &args.slug {
        Some(slug) => slug.clone(),
        None => slugify(&title),
    };
    validate_name(&slug)?;

    if site.get_post(&slug)?.is_some() {
        return Err(CmsError::PostExists { slug });
    }

    let mut fm = new_post_frontmatter(&title, Utc::now().date_naive());
    fields.apply(&mut fm)?;
    let body = read_body(&args.body)?.unwrap_or_default();

    let revalidation = site.save_post(&slug, &fm, &body)?;
    report_revalidation(&revalidation);
    println!("Created post '{slug}'");
    Ok(())
}

fn edit_post(site: &Site, args: &EditPostArgs) -> Result<()> {
    let mut post = site
        .get_post(&args.slug)?
        .ok_or_else(|| document::post_not_found(&args.slug))?;

    let fields: PostFields = args.fields.to_fields();
    let body = read_body(&args.body)?;
    if fields.is_empty() && body.is_none() {
        println!("Nothing to change for post '{}'", args.slug);
        return Ok(());
    }

    fields.apply(&mut post.frontmatter)?;
    if !post.frontmatter.contains_key(PUBLISHED_KEY) {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        post.frontmatter.insert(PUBLISHED_KEY.into(), today.into());
    }
    if let Some(body) = body {
        post.content = body;
    }

    let revalidation = site.save_post(&post.slug, &post.frontmatter, &post.content)?;
    report_revalidation(&revalidation);
    println!("Saved post '{}'", post.slug);
    Ok(())
}

fn delete_post(site: &Site, args: &DeletePostArgs) -> Result<()> {
    if site.get_post(&args.slug)?.is_none() {
        println!("Post '{}' does not exist, nothing to delete", args.slug);
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new(&format!(
            "Delete post '{}'? This action cannot be undone.",
            args.slug
        ))
        .with_default(false)
        .prompt()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let revalidation = site.delete_post(&args.slug)?;
    report_revalidation(&revalidation);
    println!("Deleted post '{}'", args.slug);
    Ok(())
}
