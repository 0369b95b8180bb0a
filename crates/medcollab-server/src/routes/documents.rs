//! Document route — POST /api/upload-pdf (multipart).

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use medcollab_core::types::PdfUploadResponse;
use medcollab_core::Error;

use crate::routes::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/upload-pdf", post(upload_pdf))
}

/// Upload and process a medical PDF document. The first file field in the
/// multipart body is taken.
async fn upload_pdf(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<PdfUploadResponse>, ApiError> {
    while let Ok(Some(field)) = multipart.next_field().await {
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::Validation(format!("failed to read upload: {}", e)))?;

        info!("Received upload {} ({} bytes)", filename, bytes.len());
        let response = state.pipeline.run_upload(&bytes).await?;
        return Ok(Json(response));
    }

    Err(ApiError(Error::Validation(
        "multipart body contains no file field".to_string(),
    )))
}
