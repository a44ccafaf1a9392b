//! Upload command implementation

use crate::cli::UploadArgs;
use crate::error::Result;
use crate::site::Site;

use super::certs::read_upload;

/// Run upload command
///
/// Prints the public path to reference from documents.
pub fn run(site: &Site, args: UploadArgs) -> Result<()> {
    let upload = match &args.file {
        Some(path) => Some(read_upload(path, args.name.as_deref())?),
        None => None,
    };

    let public_path = site.upload_asset(upload, args.folder.as_deref())?;
    println!("{public_path}");
    Ok(())
}
