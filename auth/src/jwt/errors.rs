use thiserror::Error;

/// Error type for JWT operations.
///
/// The HTTP layer reports every verification variant as unauthenticated; the
/// distinction is kept for logging and tests.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid: {0}")]
    Forged(String),

    #[error("Token is expired")]
    Expired,
}

impl JwtError {
    /// Short machine-readable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            JwtError::EncodingFailed(_) => "encoding_failed",
            JwtError::Malformed(_) => "malformed",
            JwtError::Forged(_) => "forged",
            JwtError::Expired => "expired",
        }
    }
}
