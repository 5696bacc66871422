use async_trait::async_trait;
use aws_sdk_s3 as s3;
use aws_sdk_s3::{error::DisplayErrorContext, primitives::ByteStream};
use std::path::Path;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    services::image_host::{ImageHost, StagedImage},
};

const KEY_PREFIX: &str = "productos";

pub struct S3ImageHost {
    client: s3::Client,
    bucket: String,
    assets_url: String,
}

impl S3ImageHost {
    pub fn new(client: s3::Client, bucket: String, assets_url: String) -> Self {
        Self {
            client,
            bucket,
            assets_url,
        }
    }
}

pub fn file_extension(image: &StagedImage) -> String {
    let from_content_type = match image.content_type.as_deref() {
        Some("image/jpeg") | Some("image/jpg") => Some("jpg"),
        Some("image/png") => Some("png"),
        Some("image/webp") => Some("webp"),
        Some("image/gif") => Some("gif"),
        _ => None,
    };

    from_content_type
        .map(str::to_string)
        .or_else(|| {
            image
                .file_name
                .as_deref()
                .and_then(|name| Path::new(name).extension())
                .and_then(|ext| ext.to_str())
                .map(str::to_ascii_lowercase)
        })
        .unwrap_or_else(|| "jpg".to_string())
}

pub fn public_url(assets_url: &str, key: &str) -> String {
    format!("{}/{}", assets_url, key)
}

#[async_trait]
impl ImageHost for S3ImageHost {
    async fn upload(&self, image: &StagedImage) -> Result<String> {
        let key = format!("{}/{}.{}", KEY_PREFIX, Uuid::new_v4(), file_extension(image));

        let body = ByteStream::from_path(&image.path)
            .await
            .map_err(|e| AppError::UploadError(e.to_string()))?;

        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(body);
        if let Some(content_type) = &image.content_type {
            request = request.content_type(content_type);
        }

        request
            .send()
            .await
            .map_err(|e| AppError::UploadError(DisplayErrorContext(&e).to_string()))?;

        Ok(public_url(&self.assets_url, &key))
    }
}
