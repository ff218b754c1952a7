use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Issues and verifies session tokens for a fixed lifetime.
///
/// Stateless: verification needs nothing beyond the signing secret the
/// issuer was built with. A token stays valid until `exp` passes or the
/// secret changes.
pub struct TokenIssuer {
    handler: JwtHandler,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            lifetime,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a token for `subject` starting now.
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token for `subject` as if the current time were `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed or the expiry overflows
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, now, self.lifetime)?;
        self.handler.encode(&claims)
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    ///
    /// Signature and algorithm are checked before expiry, so a forged token is
    /// reported as forged even when its claimed `exp` has passed.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be decoded or lacks required claims
    /// * `Forged` - Signature mismatch or unexpected algorithm
    /// * `Expired` - `exp` is earlier than `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let claims: Claims = self.handler.decode(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }
}
