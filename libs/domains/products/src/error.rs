use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Store could not be reached
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Store reached but the operation failed
    #[error("Database query error: {0}")]
    Query(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DatabaseError> for ProductError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Connection(msg) => ProductError::Connection(msg),
            DatabaseError::Query(msg)
            | DatabaseError::Serialization(msg)
            | DatabaseError::Config(msg) => ProductError::Query(msg),
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Connection(msg) => AppError::Database(DatabaseError::Connection(msg)),
            ProductError::Query(msg) => AppError::Database(DatabaseError::Query(msg)),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
