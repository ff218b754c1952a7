use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use secrecy::SecretString;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::EmailAddress;
use crate::domain::credential::models::LoginCommand;
use crate::domain::credential::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // A malformed email cannot belong to an account; answer like any other miss.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::from(CredentialError::InvalidCredentials))?;

    let command = LoginCommand {
        email,
        password: SecretString::from(body.password),
    };

    let session = state.auth_service.login(command).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: session.token,
            user_id: session.user_id.to_string(),
            expires_at: session.expires_at,
        },
    ))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}
