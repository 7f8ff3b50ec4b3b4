//! Uploads Config

use std::path::PathBuf;

use clap::Args;

/// Image upload settings.
#[derive(Debug, Args)]
pub struct UploadsConfig {
    /// Directory uploaded images are written to and served from
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,
}
