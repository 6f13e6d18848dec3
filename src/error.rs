//! Error types for corkboard.

use thiserror::Error;

/// Common error type for corkboard.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database error.
    ///
    /// Wraps any failure coming out of the persistence layer. Errors from
    /// sqlx are converted automatically and never surfaced raw.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Password hashing failure.
    #[error("password hashing failed: {0}")]
    Hash(#[from] crate::auth::PasswordError),

    /// Authentication error (missing or invalid access token, bad sign-in).
    #[error("authentication error: {0}")]
    Auth(String),

    /// Caller is authenticated but does not own the resource.
    #[error("permission denied: {0}")]
    Forbidden(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Uniqueness violation (e.g. an already-registered email).
    #[error("duplicate {0}")]
    Duplicate(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Database(e.to_string())
    }
}

/// Result type alias for corkboard operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = BoardError::Auth("invalid access token".to_string());
        assert_eq!(err.to_string(), "authentication error: invalid access token");
    }

    #[test]
    fn test_forbidden_error_display() {
        let err = BoardError::Forbidden("not the author".to_string());
        assert_eq!(err.to_string(), "permission denied: not the author");
    }

    #[test]
    fn test_validation_error_display() {
        let err = BoardError::Validation("body too short".to_string());
        assert_eq!(err.to_string(), "validation error: body too short");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = BoardError::NotFound("message".to_string());
        assert_eq!(err.to_string(), "message not found");
    }

    #[test]
    fn test_duplicate_error_display() {
        let err = BoardError::Duplicate("email".to_string());
        assert_eq!(err.to_string(), "duplicate email");
    }

    #[test]
    fn test_hash_error_conversion() {
        let err: BoardError =
            crate::auth::PasswordError::HashError("salt generation failed".to_string()).into();
        assert!(matches!(err, BoardError::Hash(_)));
        assert!(err.to_string().starts_with("password hashing failed"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BoardError = io_err.into();
        assert!(matches!(err, BoardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(BoardError::Auth("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
