use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    config::CloudinaryConfig,
    error::{AppError, Result},
    services::image_host::{ImageHost, StagedImage},
};

const API_BASE_URL: &str = "https://api.cloudinary.com";

#[derive(Debug, Deserialize)]
struct UploadResult {
    secure_url: Option<String>,
    error: Option<UploadFailure>,
}

#[derive(Debug, Deserialize)]
struct UploadFailure {
    message: String,
}

pub struct CloudinaryHost {
    client: reqwest::Client,
    config: CloudinaryConfig,
    endpoint: String,
}

impl CloudinaryHost {
    pub fn new(config: CloudinaryConfig) -> Self {
        let endpoint = format!("{}/v1_1/{}/image/upload", API_BASE_URL, config.cloud_name);

        tracing::info!("Cloudinary client initialized for cloud {}", config.cloud_name);

        Self {
            client: reqwest::Client::new(),
            config,
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Signs upload parameters: `k1=v1&k2=v2` sorted by key, secret appended, SHA-256 hex.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    hex::encode(Sha256::digest(format!("{}{}", to_sign, api_secret).as_bytes()))
}

#[async_trait]
impl ImageHost for CloudinaryHost {
    async fn upload(&self, image: &StagedImage) -> Result<String> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .as_secs()
            .to_string();

        let mut params = vec![("timestamp", timestamp.as_str())];
        if let Some(folder) = &self.config.folder {
            params.push(("folder", folder.as_str()));
        }
        let signature = sign(&params, &self.config.api_secret);

        let file = tokio::fs::File::open(&image.path).await?;
        let length = file.metadata().await?.len();

        let mut part = Part::stream_with_length(file, length)
            .file_name(image.file_name.clone().unwrap_or_else(|| "upload".to_string()));
        if let Some(content_type) = &image.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| AppError::UploadError(e.to_string()))?;
        }

        let mut form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        if let Some(folder) = &self.config.folder {
            form = form.text("folder", folder.clone());
        }

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::UploadError(e.to_string()))?;

        let status = response.status();
        let result: UploadResult = response
            .json()
            .await
            .map_err(|e| AppError::UploadError(e.to_string()))?;

        match (result.secure_url, result.error) {
            (Some(url), _) if status.is_success() => Ok(url),
            (_, Some(failure)) => Err(AppError::UploadError(failure.message)),
            _ => Err(AppError::UploadError(format!(
                "Image upload failed with status {}",
                status
            ))),
        }
    }
}
