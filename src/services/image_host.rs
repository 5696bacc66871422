use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::Result;

/// An uploaded file written to local disk, waiting to be relayed.
#[derive(Debug, Clone)]
pub struct StagedImage {
    pub path: PathBuf,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

/// External service that stores an image and hands back its public URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, image: &StagedImage) -> Result<String>;
}
