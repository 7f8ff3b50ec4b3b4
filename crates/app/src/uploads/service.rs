//! Uploads service.

use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::{
    fs,
    io::{AsyncWrite, AsyncWriteExt},
};
use tracing::{info, warn};

use crate::uploads::{
    UploadsServiceError, has_allowed_extension, sanitize_filename, stored_filename,
};

/// An uploaded file as received from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUpload {
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Where an accepted upload was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub filename: String,
}

/// Writes uploads into a single local directory.
#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    dir: PathBuf,
}

impl LocalUploadStore {
    /// Open the store, creating `dir` if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, io::Error> {
        let dir = dir.into();

        fs::create_dir_all(&dir).await?;

        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `upload` under a name stamped with `at`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty or disallowed names and
    /// [`UploadsServiceError::AlreadyExists`] if the generated name is taken.
    pub async fn store_at(
        &self,
        upload: NewUpload,
        at: Timestamp,
    ) -> Result<StoredUpload, UploadsServiceError> {
        if upload.file_name.trim().is_empty() {
            return Err(UploadsServiceError::MissingFile);
        }

        if !has_allowed_extension(&upload.file_name) {
            return Err(UploadsServiceError::DisallowedExtension);
        }

        let sanitized = sanitize_filename(&upload.file_name);

        if !has_allowed_extension(&sanitized) {
            return Err(UploadsServiceError::InvalidFileName);
        }

        let filename = stored_filename(&sanitized, at);
        let path = self.dir.join(&filename);

        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        write_or_discard(&path, file, &upload.contents).await?;

        info!(%filename, bytes = upload.contents.len(), "upload stored");

        Ok(StoredUpload { filename })
    }
}

/// Write `contents` through `writer`, removing the file at `path` if the write fails.
async fn write_or_discard<W>(path: &Path, mut writer: W, contents: &[u8]) -> Result<(), io::Error>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        writer.write_all(contents).await?;
        writer.flush().await
    }
    .await;

    let Err(error) = written else {
        return Ok(());
    };

    drop(writer);

    // A partial file would keep the name taken.
    if let Err(remove_error) = fs::remove_file(path).await {
        warn!(path = %path.display(), "failed to remove partial upload: {remove_error}");
    }

    Err(error)
}

#[async_trait]
impl UploadsService for LocalUploadStore {
    async fn store(&self, upload: NewUpload) -> Result<StoredUpload, UploadsServiceError> {
        self.store_at(upload, Timestamp::now()).await
    }
}

#[automock]
#[async_trait]
pub trait UploadsService: Send + Sync {
    /// Validate and persist an uploaded image, returning its stored name.
    async fn store(&self, upload: NewUpload) -> Result<StoredUpload, UploadsServiceError>;
}
