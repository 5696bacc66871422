use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    MigrationError(sqlx::migrate::MigrateError),
    ConfigError(String),
    UploadError(String),
    IoError(std::io::Error),
    InternalError(String),
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "{}", e),
            AppError::MigrationError(e) => write!(f, "{}", e),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::UploadError(msg) => write!(f, "{}", msg),
            AppError::IoError(e) => write!(f, "{}", e),
            AppError::InternalError(msg) => write!(f, "{}", msg),
            AppError::NotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::MigrationError(err)
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl AppError {
    pub fn product_not_found() -> Self {
        AppError::NotFound(PRODUCT_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Failures are reported to the caller with their underlying message as-is.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::DatabaseError(e) => tracing::error!("Database error: {:?}", e),
            AppError::MigrationError(e) => tracing::error!("Migration error: {:?}", e),
            AppError::ConfigError(msg) => tracing::error!("Configuration error: {}", msg),
            AppError::UploadError(msg) => tracing::error!("Upload error: {}", msg),
            AppError::IoError(e) => tracing::error!("I/O error: {:?}", e),
            AppError::InternalError(msg) => tracing::error!("Internal error: {}", msg),
            AppError::NotFound(_) => {}
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
