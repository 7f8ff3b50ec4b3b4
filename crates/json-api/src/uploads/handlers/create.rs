//! Upload Image Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::uploads::NewUpload;

use crate::{extensions::*, state::State, uploads::errors::into_status_error};

const FILE_FIELD: &str = "file";

/// Upload Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadResponse {
    /// Stored name, retrievable under `/uploads/{filename}`
    pub filename: String,
}

/// Upload Image Handler
///
/// Accepts a multipart form with a `file` field holding a png, jpg, jpeg or gif image.
#[endpoint(
    tags("uploads"),
    summary = "Upload Image",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Image stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing file or file type not allowed"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin privileges required"),
        (status_code = StatusCode::CONFLICT, description = "A file with this name already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "uploads.create", skip(req, depot), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UploadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(part) = req.file(FILE_FIELD).await else {
        return Err(StatusError::bad_request().brief("No file provided"));
    };

    let file_name = part.name().unwrap_or_default().to_string();

    let contents = tokio::fs::read(part.path())
        .await
        .or_500("failed to read uploaded file")?;

    let stored = state
        .app
        .uploads
        .store(NewUpload {
            file_name,
            contents,
        })
        .await
        .map_err(into_status_error)?;

    tracing::info!(filename = %stored.filename, "stored upload");

    Ok(Json(UploadResponse {
        filename: stored.filename,
    }))
}
