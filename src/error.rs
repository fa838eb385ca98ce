//! Error types for the community backend.

use thiserror::Error;

/// Common error type for the community backend.
#[derive(Error, Debug)]
pub enum CommunityError {
    /// Database error that is not a constraint violation.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required field is missing, empty or malformed.
    ///
    /// Raised both by entity construction and by NOT NULL / CHECK / foreign key
    /// constraints in the store.
    #[error("validation error: {0}")]
    Validation(String),

    /// Duplicate email, nickname or heart.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// The acting account may not modify the resource.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Password hashing or verification error.
    #[error("password error: {0}")]
    Password(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for CommunityError {
    fn from(e: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match &e {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    CommunityError::Conflict(db_err.message().to_string())
                }
                ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::ForeignKeyViolation => {
                    CommunityError::Validation(db_err.message().to_string())
                }
                _ => CommunityError::Database(e.to_string()),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                CommunityError::DatabaseConnection(e.to_string())
            }
            _ => CommunityError::Database(e.to_string()),
        }
    }
}

/// Result type alias for community operations.
pub type Result<T> = std::result::Result<T, CommunityError>;
