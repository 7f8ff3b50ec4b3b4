//! Uploads service errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadsServiceError {
    #[error("no file provided")]
    MissingFile,

    #[error("file type not allowed")]
    DisallowedExtension,

    #[error("file name is not usable")]
    InvalidFileName,

    #[error("a file with this name already exists")]
    AlreadyExists,

    #[error("upload storage error")]
    Io(#[source] io::Error),
}

impl From<io::Error> for UploadsServiceError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::AlreadyExists => Self::AlreadyExists,
            _ => Self::Io(error),
        }
    }
}
