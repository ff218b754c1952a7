use chrono::DateTime;
use chrono::Utc;
use secrecy::ExposeSecret;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::password::HashedCredential;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::settings::AuthSettings;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Holds no mutable state; share it behind an `Arc` across request handlers.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,

    /// Instant the token stops verifying
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `settings` - Signing secret, hashing cost and token lifetime
    ///
    /// # Errors
    /// * `InvalidCost` - The hashing cost is not usable
    pub fn new(settings: &AuthSettings) -> Result<Self, PasswordError> {
        Ok(Self {
            password_hasher: PasswordHasher::with_cost(settings.hash_cost)?,
            token_issuer: TokenIssuer::new(
                settings.signing_secret.expose_secret().as_bytes(),
                settings.token_lifetime,
            ),
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<HashedCredential, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &HashedCredential) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Spend the cost of a password check for an account that does not exist.
    pub fn reject_unknown(&self, password: &str) {
        self.password_hasher.verify_decoy(password);
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier embedded in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &HashedCredential,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let now = Utc::now();
        let access_token = self.token_issuer.issue_at(subject, now)?;
        let expires_at = now
            .checked_add_signed(self.token_issuer.lifetime())
            .ok_or_else(|| JwtError::EncodingFailed("Token lifetime out of range".to_string()))?;

        Ok(AuthenticationResult {
            access_token,
            expires_at,
        })
    }

    /// Generate JWT token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token(&self, subject: &str) -> Result<String, JwtError> {
        self.token_issuer.issue(subject)
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `Malformed`, `Forged` or `Expired` - Token validation failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_issuer.verify(token)
    }
}
