pub mod cloudinary_service;
pub mod image_host;
pub mod s3_service;

pub use cloudinary_service::CloudinaryHost;
pub use image_host::{ImageHost, StagedImage};
pub use s3_service::S3ImageHost;
