use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use std::path::Path;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::{
    AppState,
    error::{AppError, Result},
    models::UploadResponse,
    services::StagedImage,
};

const IMAGE_FIELD: &str = "image";

pub async fn upload_image(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|e| AppError::UploadError(e.body_text()))?;
    let image = stage_image(&mut multipart, &state.upload_dir).await?;

    let uploaded = state.images.upload(&image).await;

    if let Err(e) = tokio::fs::remove_file(&image.path).await {
        tracing::warn!("Failed to remove {}: {}", image.path.display(), e);
    }

    let url = uploaded?;
    tracing::info!("Image uploaded to {}", url);

    Ok(Json(UploadResponse { url }))
}

/// Writes the `image` field to a fresh file under `dir`.
async fn stage_image(multipart: &mut Multipart, dir: &Path) -> Result<StagedImage> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UploadError(e.body_text()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        // A plain text part under the right name is not a file.
        if field.file_name().is_none() {
            break;
        }

        let image = StagedImage {
            path: dir.join(Uuid::new_v4().simple().to_string()),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
        };

        if let Err(e) = write_field(&mut field, &image.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&image.path).await {
                tracing::warn!("Failed to remove {}: {}", image.path.display(), cleanup);
            }
            return Err(e);
        }

        return Ok(image);
    }

    Err(AppError::UploadError(format!(
        "No file received in field '{}'",
        IMAGE_FIELD
    )))
}

async fn write_field(field: &mut axum::extract::multipart::Field<'_>, path: &Path) -> Result<()> {
    let mut file = tokio::fs::File::create(path).await?;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::UploadError(e.body_text()))?
    {
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(())
}
