//! Authentication utilities library
//!
//! Credential and session verification core shared by the services:
//! - Password hashing (Argon2id, configurable cost)
//! - Session token issuance and verification (HS256 JWT, fixed lifetime)
//! - Authentication coordination
//!
//! Nothing here touches HTTP or storage. Both components are stateless apart
//! from the read-only signing secret, so one instance can serve every request.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{JwtError, TokenIssuer};
//! use chrono::{Duration, Utc};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = issuer.issue("user123").unwrap();
//! assert_eq!(issuer.verify(&token).unwrap().subject(), "user123");
//!
//! let later = Utc::now() + Duration::hours(25);
//! assert!(matches!(issuer.verify_at(&token, later), Err(JwtError::Expired)));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthSettings, Authenticator};
//!
//! let settings = AuthSettings::new("secret_key_at_least_32_bytes_long!").with_hash_cost(1);
//! let auth = Authenticator::new(&settings).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.subject(), "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod settings;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use password::HashedCredential;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use settings::AuthSettings;
