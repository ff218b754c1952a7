use thiserror::Error;

/// Error for database administration operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatabaseAdminError {
    /// The server could not be reached or did not answer in time
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}
