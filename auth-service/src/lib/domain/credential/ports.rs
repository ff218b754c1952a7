use async_trait::async_trait;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::AuthenticatedSubject;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::EmailAddress;
use crate::domain::credential::models::LoginCommand;
use crate::domain::credential::models::RegisterCommand;
use crate::domain::credential::models::Session;

/// Port for authentication domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, name, and password
    ///
    /// # Returns
    /// Created credential entity
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `Database` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Credential, CredentialError>;

    /// Check an email and password and issue a session token.
    ///
    /// Unknown email and wrong password are reported identically.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such account or password mismatch
    /// * `Token` - Token generation failed
    /// * `Database` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<Session, CredentialError>;

    /// Verify a bearer token and recover its subject.
    ///
    /// # Errors
    /// * `Token` - Token is malformed, forged or expired
    fn verify(&self, token: &str) -> Result<AuthenticatedSubject, CredentialError>;
}

/// Persistence operations for the credential aggregate.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Retrieve credential by email address.
    ///
    /// # Returns
    /// Optional credential entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, CredentialError>;

    /// Persist new credential to storage.
    ///
    /// # Returns
    /// Created credential entity
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Database` - Database operation failed
    async fn insert(&self, credential: Credential) -> Result<Credential, CredentialError>;
}
