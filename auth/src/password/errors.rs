use thiserror::Error;

/// Error type for password operations.
///
/// Verification never fails with an error; a malformed hash is reported as a mismatch.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid hashing cost {cost}: {reason}")]
    InvalidCost { cost: u32, reason: String },
}
