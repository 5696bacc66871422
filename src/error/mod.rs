mod app_error;

pub use app_error::{AppError, PRODUCT_NOT_FOUND};

pub type Result<T> = std::result::Result<T, AppError>;
