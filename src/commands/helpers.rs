//! Command helper utilities

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::BodyArgs;
use crate::config::{CONFIG_FILE, CmsConfig, SitePaths};
use crate::error::{Result, fs};
use crate::site::{Revalidation, Site};

/// Resolve the current directory
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}")))
}

/// Resolve site paths from the global CLI options and config file
pub fn resolve_site_paths(site: Option<PathBuf>, config: Option<PathBuf>) -> Result<SitePaths> {
    let cwd = current_dir()?;
    let config_path = config.unwrap_or_else(|| cwd.join(CONFIG_FILE));
    let config = CmsConfig::load(&config_path)?;
    Ok(SitePaths::resolve(site, &config, &cwd))
}

/// Open the site selected by the global CLI options
pub fn open_site(site: Option<PathBuf>, config: Option<PathBuf>) -> Result<Site> {
    let paths = resolve_site_paths(site, config)?;
    Ok(Site::open(&paths))
}

/// Read the body given on the command line, if any
pub fn read_body(args: &BodyArgs) -> Result<Option<String>> {
    if let Some(body) = &args.body {
        return Ok(Some(body.clone()));
    }
    let Some(path) = &args.body_file else {
        return Ok(None);
    };

    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .map_err(|e| fs::read_failed("<stdin>", e.to_string()))?;
        return Ok(Some(body));
    }

    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))
}

/// Log the pages to re-render after an edit
pub fn report_revalidation(revalidation: &Revalidation) {
    tracing::info!(
        count = revalidation.paths().len(),
        paths = %revalidation,
        "pages to revalidate"
    );
}
