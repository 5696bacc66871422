mod app_config;
mod s3_config;

pub use app_config::{
    AppConfig, CloudinaryConfig, CorsConfig, DatabaseConfig, ImageHostConfig, S3Config,
    ServerConfig, UploadConfig,
};
pub use s3_config::*;
