use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for certs command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List certifications:\n    resume-cms certs list\n\n\
                  Add one with a logo upload:\n    resume-cms certs add --name \"AWS CCP\" --url https://credly.com/x --image-file ccp.png\n\n\
                  Change a link:\n    resume-cms certs edit 0 --url https://credly.com/y\n\n\
                  Remove one:\n    resume-cms certs remove 1")]
pub struct CertsArgs {
    #[command(subcommand)]
    pub command: Option<CertsSubcommand>,
}

/// Certs subcommands
#[derive(Subcommand, Debug)]
pub enum CertsSubcommand {
    /// List certifications
    List(ListCertsArgs),

    /// Add a certification
    Add(AddCertArgs),

    /// Change a certification
    Edit(EditCertArgs),

    /// Remove a certification
    Remove(RemoveCertArgs),
}

#[derive(Parser, Debug, Default)]
pub struct ListCertsArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct AddCertArgs {
    /// Certification name
    #[arg(long)]
    pub name: String,

    /// Credential URL
    #[arg(long, default_value = "")]
    pub url: String,

    #[command(flatten)]
    pub image: CertImageArgs,
}

#[derive(Parser, Debug)]
pub struct EditCertArgs {
    /// Certification id as shown by 'certs list'
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New credential URL
    #[arg(long)]
    pub url: Option<String>,

    #[command(flatten)]
    pub image: CertImageArgs,
}

#[derive(Parser, Debug)]
pub struct RemoveCertArgs {
    /// Certification id as shown by 'certs list'
    pub id: String,
}

/// Logo given as an existing path or a file to upload
#[derive(Args, Debug, Default)]
pub struct CertImageArgs {
    /// Logo path already on the site (e.g. /assets/images/certificates/x.png)
    #[arg(long, conflicts_with = "image_file")]
    pub image: Option<String>,

    /// Upload this file into the certificates folder and use it as logo
    #[arg(long, value_name = "PATH")]
    pub image_file: Option<PathBuf>,
}
