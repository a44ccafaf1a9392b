use clap::Parser;
use std::path::PathBuf;

/// Arguments for upload command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Upload a certificate logo:\n    resume-cms upload ./aws.png\n\n\
                  Upload a post image under another name:\n    resume-cms upload ./shot.png --folder posts --name architecture.png\n\n\
                  Files are renamed to lowercase with characters outside [a-z0-9.] replaced by '_'.\n  \
                  An existing file with the same name is overwritten.")]
pub struct UploadArgs {
    /// File to upload
    pub file: Option<PathBuf>,

    /// Target folder (certificates or posts); other values fall back to certificates
    #[arg(long, short = 'f')]
    pub folder: Option<String>,

    /// Name to store the file under (defaults to the file's name)
    #[arg(long)]
    pub name: Option<String>,
}
