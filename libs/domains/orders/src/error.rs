use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<DatabaseError> for OrderError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Connection(msg) => OrderError::Connection(msg),
            DatabaseError::Query(msg)
            | DatabaseError::Serialization(msg)
            | DatabaseError::Config(msg) => OrderError::Query(msg),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(msg) => AppError::BadRequest(msg),
            OrderError::Connection(msg) => AppError::Database(DatabaseError::Connection(msg)),
            OrderError::Query(msg) => AppError::Database(DatabaseError::Query(msg)),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
