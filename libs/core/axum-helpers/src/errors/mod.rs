pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DatabaseError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// - `code`: integer error code for logging/monitoring (e.g., 2001)
/// - `error`: machine-readable identifier (e.g., "DATABASE_CONNECTION")
/// - `message`: human-readable detail, never empty
/// - `details`: optional structured detail (per-field validation errors)
///
/// ```json
/// {
///   "code": 2001,
///   "error": "DATABASE_CONNECTION",
///   "message": "Server selection timeout: No available servers",
///   "details": null
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: i32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {}",
                    e
                );
                (
                    e.status(),
                    ErrorResponse::new(ErrorCode::JsonExtraction, e.body_text()),
                )
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::BadRequest.code(),
                    "Query extraction error: {}",
                    e
                );
                (
                    e.status(),
                    ErrorResponse::new(ErrorCode::BadRequest, e.body_text()),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        ErrorCode::ValidationError,
                        ErrorCode::ValidationError.default_message(),
                    )
                    .with_details(validation_details(&e)),
                )
            }
            AppError::Database(e) => map_database_error(e),
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::BadRequest, msg),
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(ErrorCode::NotFound, msg),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ErrorCode::InternalError, msg),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    msg
                );
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(ErrorCode::ServiceUnavailable, msg),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Every store failure is a 500; the code tells callers which kind it was.
fn map_database_error(error: DatabaseError) -> (StatusCode, ErrorResponse) {
    let code = match &error {
        DatabaseError::Connection(_) => ErrorCode::DatabaseConnection,
        DatabaseError::Query(_) => ErrorCode::DatabaseQuery,
        DatabaseError::Serialization(_) => ErrorCode::DatabaseSerialization,
        DatabaseError::Config(_) => ErrorCode::DatabaseConfig,
    };

    tracing::error!(error_code = code.code(), "Database error: {}", error);

    let message = match error {
        DatabaseError::Connection(msg)
        | DatabaseError::Query(msg)
        | DatabaseError::Serialization(msg)
        | DatabaseError::Config(msg) if !msg.is_empty() => msg,
        _ => code.default_message().to_string(),
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new(code, message),
    )
}

/// Flatten validator errors into `{ field: [{code, message, params}] }`.
///
/// Nested structs and lists are keyed by their dotted / indexed path, e.g.
/// `items[0].quantity`.
pub fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    collect_validation_errors(errors, String::new(), &mut map);
    serde_json::Value::Object(map)
}

fn collect_validation_errors(
    errors: &ValidationErrors,
    prefix: String,
    out: &mut serde_json::Map<String, serde_json::Value>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let entries = field_errors
                    .iter()
                    .map(|err| {
                        serde_json::json!({
                            "code": err.code,
                            "message": err.message,
                            "params": err.params,
                        })
                    })
                    .collect();
                out.insert(path, serde_json::Value::Array(entries));
            }
            ValidationErrorsKind::Struct(inner) => {
                collect_validation_errors(inner, path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_validation_errors(inner, format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}
