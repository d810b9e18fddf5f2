/// Database error kinds surfaced to the domain layer.
///
/// Callers branch on the variant: `Connection` means the store could not be
/// reached at all, `Query` means the store answered and rejected the operation.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Store unreachable (server selection, DNS, socket, pool cleared)
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Store reachable but the command failed
    #[error("Query failed: {0}")]
    Query(String),

    /// A record could not be converted to or from BSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DatabaseError {
    pub fn is_connection(&self) -> bool {
        matches!(self, DatabaseError::Connection(_))
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for DatabaseError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => DatabaseError::Connection(err.to_string()),
            ErrorKind::InvalidArgument { .. } => DatabaseError::Config(err.to_string()),
            _ => DatabaseError::Query(err.to_string()),
        }
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::bson::ser::Error> for DatabaseError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        DatabaseError::Serialization(err.to_string())
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::bson::de::Error> for DatabaseError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        DatabaseError::Serialization(err.to_string())
    }
}
