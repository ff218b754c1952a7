use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated subject in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Middleware that validates bearer tokens and adds the subject to request extensions
pub async fn authenticate<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let subject = state.auth_service.verify(token).map_err(|e| {
        if let CredentialError::Token(token_error) = &e {
            tracing::warn!(kind = token_error.kind(), error = %token_error, "JWT validation failed");
        }
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: subject.user_id,
        expires_at: subject.expires_at,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    // The scheme is case-insensitive (RFC 7235).
    let token = auth_str
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token)
        .ok_or_else(|| {
            ApiError::Unauthorized(
                "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
            )
        })?;

    if token.trim().is_empty() {
        return Err(ApiError::Unauthorized("Missing bearer token".to_string()));
    }

    Ok(token.trim())
}
