use std::fmt;
use std::str::FromStr;

use auth::HashedCredential;
use chrono::DateTime;
use chrono::Utc;
use secrecy::ExposeSecret;
use secrecy::SecretString;
use uuid::Uuid;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::errors::EmailError;
use crate::domain::credential::errors::NameError;

/// Credential aggregate entity.
///
/// A registered account as persisted by the credential store. Holds the
/// password hash only; the plaintext never reaches this type.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: CredentialId,
    pub email: EmailAddress,
    pub name: DisplayName,
    pub password_hash: HashedCredential,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Credential unique identifier type. Used as the token subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CredentialId(pub Uuid);

impl CredentialId {
    /// Generate a new random credential ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CredentialId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Stored lowercased
/// so lookups by email are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name attached to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MAX_LENGTH: usize = 128;

    /// Create a new display name, trimming surrounding whitespace.
    ///
    /// # Errors
    /// * `Empty` - Name is empty after trimming
    /// * `TooLong` - Name exceeds 128 characters
    pub fn new(name: String) -> Result<Self, NameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            Err(NameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new account with validated fields.
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub name: DisplayName,
    pub password: SecretString,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `name` - Validated display name
    /// * `password` - Plaintext password (hashed by the service)
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    pub fn new(
        email: EmailAddress,
        name: DisplayName,
        password: SecretString,
    ) -> Result<Self, CredentialError> {
        if password.expose_secret().is_empty() {
            return Err(CredentialError::EmptyPassword);
        }

        Ok(Self {
            email,
            name,
            password,
        })
    }
}

/// Command to log in with an email and password.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: SecretString,
}

/// Issued session for a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: CredentialId,
    pub expires_at: DateTime<Utc>,
}

/// Identity recovered from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSubject {
    pub user_id: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<auth::Claims> for AuthenticatedSubject {
    fn from(claims: auth::Claims) -> Self {
        Self {
            expires_at: claims.expires_at(),
            user_id: claims.sub,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_normalized() {
        let email = EmailAddress::new("  Alice@Example.COM ".to_string()).unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_email_rejects_garbage() {
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display_name_validation() {
        assert_eq!(
            DisplayName::new("  Alice ".to_string()).unwrap().as_str(),
            "Alice"
        );
        assert_eq!(DisplayName::new("   ".to_string()), Err(NameError::Empty));
        assert!(matches!(
            DisplayName::new("x".repeat(129)),
            Err(NameError::TooLong { max: 128, actual: 129 })
        ));
    }

    #[test]
    fn test_register_command_rejects_empty_password() {
        let result = RegisterCommand::new(
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            DisplayName::new("Alice".to_string()).unwrap(),
            SecretString::from(String::new()),
        );

        assert!(matches!(result, Err(CredentialError::EmptyPassword)));
    }

    #[test]
    fn test_register_command_debug_hides_password() {
        let command = RegisterCommand::new(
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            DisplayName::new("Alice".to_string()).unwrap(),
            SecretString::from("hunter2-password".to_string()),
        )
        .unwrap();

        assert!(!format!("{:?}", command).contains("hunter2-password"));
    }

    #[test]
    fn test_credential_ids_are_unique() {
        let first = CredentialId::new();
        let second = CredentialId::new();

        assert_ne!(first, second);
        assert_eq!(first.to_string().len(), 36);
    }
}
