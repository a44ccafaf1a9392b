//! Certs command implementation
//!
//! Certifications are edited as a list and written back as the HTML block
//! at the end of the skills spec. Ids are positions and shift after a
//! removal.

use std::path::Path;

use console::Style;

use crate::asset::{AssetFolder, AssetUpload};
use crate::certification::{Certification, renumber};
use crate::cli::certs::{AddCertArgs, CertImageArgs, EditCertArgs, ListCertsArgs, RemoveCertArgs};
use crate::cli::{CertsArgs, CertsSubcommand};
use crate::error::{CmsError, Result, fs};
use crate::site::Site;

use super::helpers::report_revalidation;

/// Run certs command
pub fn run(site: &Site, args: CertsArgs) -> Result<()> {
    match args.command {
        None => list_certs(site, &ListCertsArgs::default()),
        Some(CertsSubcommand::List(args)) => list_certs(site, &args),
        Some(CertsSubcommand::Add(args)) => add_cert(site, &args),
        Some(CertsSubcommand::Edit(args)) => edit_cert(site, &args),
        Some(CertsSubcommand::Remove(args)) => remove_cert(site, &args),
    }
}

fn list_certs(site: &Site, args: &ListCertsArgs) -> Result<()> {
    let certs = site.certifications()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&certs)?);
        return Ok(());
    }

    if certs.is_empty() {
        println!("No certificates found.");
        return Ok(());
    }

    println!("Certifications ({}):", certs.len());
    println!();
    for cert in &certs {
        println!(
            "  {} {}",
            Style::new().dim().apply_to(format!("[{}]", cert.id)),
            Style::new().bold().yellow().apply_to(&cert.name)
        );
        println!("    {} {}", Style::new().bold().apply_to("URL:"), cert.url);
        println!("    {} {}", Style::new().bold().apply_to("Image:"), cert.image);
    }
    Ok(())
}

fn add_cert(site: &Site, args: &AddCertArgs) -> Result<()> {
    let image = resolve_image(site, &args.image)?.unwrap_or_default();
    let mut certs = site.certifications()?;
    let cert = Certification::new(&args.name, &args.url, image);
    if certs.iter().any(|existing| existing.same_card(&cert)) {
        println!("Note: an identical certification is already listed");
    }
    certs.push(cert);

    save(site, &mut certs)?;
    println!("Added certification '{}'", args.name);
    Ok(())
}

fn edit_cert(site: &Site, args: &EditCertArgs) -> Result<()> {
    let mut certs = site.certifications()?;
    let image = resolve_image(site, &args.image)?;
    let cert = find_mut(&mut certs, &args.id)?;

    if let Some(name) = &args.name {
        cert.name.clone_from(name);
    }
    if let Some(url) = &args.url {
        cert.url.clone_from(url);
    }
    if let Some(image) = image {
        cert.image = image;
    }
    let name = cert.name.clone();

    save(site, &mut certs)?;
    println!("Updated certification '{name}'");
    Ok(())
}

fn remove_cert(site: &Site, args: &RemoveCertArgs) -> Result<()> {
    let mut certs = site.certifications()?;
    let index = certs
        .iter()
        .position(|c| c.id == args.id)
        .ok_or_else(|| CmsError::CertificationNotFound {
            id: args.id.clone(),
        })?;
    let removed = certs.remove(index);

    save(site, &mut certs)?;
    println!("Removed certification '{}'", removed.name);
    Ok(())
}

fn find_mut<'a>(certs: &'a mut [Certification], id: &str) -> Result<&'a mut Certification> {
    certs
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| CmsError::CertificationNotFound { id: id.to_string() })
}

fn save(site: &Site, certs: &mut [Certification]) -> Result<()> {
    renumber(certs);
    let revalidation = site.save_certifications(certs)?;
    report_revalidation(&revalidation);
    Ok(())
}

/// Image path from `--image`, or the public path of an `--image-file`
/// uploaded into the certificates folder.
fn resolve_image(site: &Site, args: &CertImageArgs) -> Result<Option<String>> {
    if let Some(image) = &args.image {
        return Ok(Some(image.clone()));
    }
    let Some(path) = &args.image_file else {
        return Ok(None);
    };

    let upload = read_upload(path, None)?;
    let public_path = site.upload_asset(Some(upload), Some(AssetFolder::Certificates.as_str()))?;
    println!("Uploaded {} -> {public_path}", path.display());
    Ok(Some(public_path))
}

/// Read a local file as an upload named after the file, or `name`.
pub(super) fn read_upload(path: &Path, name: Option<&str>) -> Result<AssetUpload> {
    let bytes =
        std::fs::read(path).map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;
    let name = match name {
        Some(name) => name.to_string(),
        None => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    Ok(AssetUpload::new(name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SitePaths;
    use tempfile::TempDir;

    fn site() -> (TempDir, Site) {
        let temp = TempDir::new().unwrap();
        let site = Site::open(&SitePaths::for_root(temp.path().join("site")));
        (temp, site)
    }

    fn add(site: &Site, name: &str) {
        add_cert(
            site,
            &AddCertArgs {
                name: name.to_string(),
                url: format!("https://example.com/{name}"),
                image: CertImageArgs {
                    image: Some(format!("/assets/images/certificates/{name}.png")),
                    image_file: None,
                },
            },
        )
        .unwrap();
    }

    #[test]
    fn add_edit_remove() {
        let (_temp, site) = site();
        add(&site, "alpha");
        add(&site, "beta");
        add(&site, "gamma");

        edit_cert(
            &site,
            &EditCertArgs {
                id: "1".to_string(),
                name: Some("Beta Prime".to_string()),
                url: None,
                image: CertImageArgs::default(),
            },
        )
        .unwrap();
        remove_cert(&site, &RemoveCertArgs { id: "0".to_string() }).unwrap();

        let certs = site.certifications().unwrap();
        let names: Vec<_> = certs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Beta Prime", "gamma"]);
        assert_eq!(certs[0].id, "0");
        assert_eq!(certs[0].url, "https://example.com/beta");
    }

    #[test]
    fn unknown_id_fails() {
        let (_temp, site) = site();
        add(&site, "alpha");
        assert!(matches!(
            remove_cert(&site, &RemoveCertArgs { id: "7".to_string() }),
            Err(CmsError::CertificationNotFound { .. })
        ));
    }

    #[test]
    fn add_with_image_file_uploads_logo() {
        let (temp, site) = site();
        let logo = temp.path().join("AWS Logo.PNG");
        std::fs::write(&logo, b"png").unwrap();

        add_cert(
            &site,
            &AddCertArgs {
                name: "AWS".to_string(),
                url: "https://aws".to_string(),
                image: CertImageArgs {
                    image: None,
                    image_file: Some(logo),
                },
            },
        )
        .unwrap();

        let certs = site.certifications().unwrap();
        assert_eq!(certs[0].image, "/assets/images/certificates/aws_logo.png");
        assert!(
            temp.path()
                .join("site/public/assets/images/certificates/aws_logo.png")
                .exists()
        );
    }
}
