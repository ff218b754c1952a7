use chrono::Duration;
use secrecy::SecretString;

/// Configuration consumed by [`Authenticator`](crate::Authenticator).
///
/// The signing secret is read-only for the lifetime of the process and must be
/// identical on every instance that verifies tokens.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Shared secret used to sign and verify every token
    pub signing_secret: SecretString,

    /// Adaptive work factor for password hashing
    pub hash_cost: u32,

    /// Validity window of an issued token
    pub token_lifetime: Duration,
}

impl AuthSettings {
    pub const DEFAULT_HASH_COST: u32 = argon2::Params::DEFAULT_T_COST;
    pub const DEFAULT_TOKEN_LIFETIME_HOURS: i64 = 24;

    /// Settings with default cost and a 24 hour token lifetime.
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: SecretString::from(signing_secret.into()),
            hash_cost: Self::DEFAULT_HASH_COST,
            token_lifetime: Duration::hours(Self::DEFAULT_TOKEN_LIFETIME_HOURS),
        }
    }

    pub fn with_hash_cost(mut self, hash_cost: u32) -> Self {
        self.hash_cost = hash_cost;
        self
    }

    pub fn with_token_lifetime(mut self, token_lifetime: Duration) -> Self {
        self.token_lifetime = token_lifetime;
        self
    }
}
