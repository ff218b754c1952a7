use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::HashedCredential;
use chrono::Utc;
use secrecy::ExposeSecret;
use secrecy::SecretString;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::AuthenticatedSubject;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::CredentialId;
use crate::domain::credential::models::LoginCommand;
use crate::domain::credential::models::RegisterCommand;
use crate::domain::credential::models::Session;
use crate::domain::credential::ports::AuthServicePort;
use crate::domain::credential::ports::CredentialRepository;

/// Domain service implementation for authentication operations.
///
/// Password hashing and checking run on the blocking pool; the Argon2 cost is
/// a deliberate CPU floor and must not stall the async workers.
pub struct AuthService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
}

impl<CR> AuthService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential persistence implementation
    /// * `authenticator` - Password hasher and token issuer
    pub fn new(repository: Arc<CR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: SecretString) -> Result<HashedCredential, CredentialError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose_secret()))
            .await
            .map_err(|e| CredentialError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(CredentialError::from)
    }
}

#[async_trait]
impl<CR> AuthServicePort for AuthService<CR>
where
    CR: CredentialRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Credential, CredentialError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(CredentialError::DuplicateEmail(command.email.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let now = Utc::now();
        let credential = Credential {
            id: CredentialId::new(),
            email: command.email,
            name: command.name,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.insert(credential).await?;
        tracing::info!(user_id = %created.id, "Credential registered");

        Ok(created)
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, CredentialError> {
        let credential = self.repository.find_by_email(&command.email).await?;
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;

        let session = tokio::task::spawn_blocking(move || {
            let Some(credential) = credential else {
                authenticator.reject_unknown(password.expose_secret());
                tracing::debug!(reason = "unknown_account", "Login rejected");
                return Err(CredentialError::InvalidCredentials);
            };

            let result = authenticator
                .authenticate(
                    password.expose_secret(),
                    &credential.password_hash,
                    &credential.id.to_string(),
                )
                .map_err(|e| {
                    tracing::debug!(user_id = %credential.id, error = %e, "Login rejected");
                    CredentialError::from(e)
                })?;

            Ok(Session {
                token: result.access_token,
                user_id: credential.id,
                expires_at: result.expires_at,
            })
        })
        .await
        .map_err(|e| CredentialError::Unknown(format!("Login task failed: {}", e)))??;

        tracing::info!(user_id = %session.user_id, "Session issued");

        Ok(session)
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedSubject, CredentialError> {
        self.authenticator
            .validate_token(token)
            .map(AuthenticatedSubject::from)
            .map_err(CredentialError::from)
    }
}
