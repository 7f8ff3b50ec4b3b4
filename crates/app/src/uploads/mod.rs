//! Product image uploads

mod errors;
mod filename;
mod service;

pub use errors::UploadsServiceError;
pub use filename::*;
pub use service::*;
