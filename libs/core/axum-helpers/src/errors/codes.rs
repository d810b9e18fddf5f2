//! Type-safe error codes for API responses.
//!
//! Each code carries a string identifier for clients, an integer for logs
//! and metrics, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body or query failed validation rules
    ValidationError,

    /// Request body could not be parsed as the expected JSON shape
    JsonExtraction,

    /// Route or resource does not exist
    NotFound,

    /// Route exists but not for this HTTP method
    MethodNotAllowed,

    /// Generic client error
    BadRequest,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Store errors (2000-2999)
    /// Document store could not be reached
    DatabaseConnection,

    /// Document store rejected the operation
    DatabaseQuery,

    /// A record could not be converted to or from BSON
    DatabaseSerialization,

    /// Store client misconfigured
    DatabaseConfig,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabaseQuery => "DATABASE_QUERY",
            Self::DatabaseSerialization => "DATABASE_SERIALIZATION",
            Self::DatabaseConfig => "DATABASE_CONFIG",
        }
    }

    /// Integer code for structured logs:
    /// - 1000-1999: client and generic server errors
    /// - 2000-2999: store errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,
            Self::ServiceUnavailable => 1011,
            Self::MethodNotAllowed => 1012,
            Self::DatabaseConnection => 2001,
            Self::DatabaseQuery => 2002,
            Self::DatabaseSerialization => 2003,
            Self::DatabaseConfig => 2004,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "The requested resource was not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::BadRequest => "Bad request",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseConnection => "Database is unavailable",
            Self::DatabaseQuery => "Database operation failed",
            Self::DatabaseSerialization => "Failed to convert database record",
            Self::DatabaseConfig => "Database configuration error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::DatabaseConnection.as_str(), "DATABASE_CONNECTION");
    }

    #[test]
    fn test_store_codes_live_in_2000_range() {
        for code in [
            ErrorCode::DatabaseConnection,
            ErrorCode::DatabaseQuery,
            ErrorCode::DatabaseSerialization,
            ErrorCode::DatabaseConfig,
        ] {
            assert!((2000..3000).contains(&code.code()), "{code} out of range");
        }
    }

    #[test]
    fn test_error_code_serde_matches_as_str() {
        let json = serde_json::to_string(&ErrorCode::DatabaseQuery).unwrap();
        assert_eq!(json, "\"DATABASE_QUERY\"");

        let code: ErrorCode = serde_json::from_str("\"VALIDATION_ERROR\"").unwrap();
        assert_eq!(code, ErrorCode::ValidationError);
    }
}
