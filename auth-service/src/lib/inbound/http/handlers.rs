use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::credential::errors::CredentialError;

pub mod login;
pub mod register;
pub mod verify;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::DuplicateEmail(_) => ApiError::Conflict(err.to_string()),
            CredentialError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            // Every token failure looks the same from outside.
            CredentialError::Token(_) => {
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            CredentialError::InvalidEmail(_)
            | CredentialError::InvalidName(_)
            | CredentialError::EmptyPassword => ApiError::UnprocessableEntity(err.to_string()),
            CredentialError::Password(_)
            | CredentialError::Database(_)
            | CredentialError::Unknown(_) => {
                tracing::error!(error = %err, "Request failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use auth::JwtError;
    use auth::PasswordError;

    use super::*;

    #[test]
    fn test_token_errors_collapse_to_unauthorized() {
        let expired = ApiError::from(CredentialError::Token(JwtError::Expired));
        let forged = ApiError::from(CredentialError::Token(JwtError::Forged(
            "InvalidSignature".to_string(),
        )));
        let malformed = ApiError::from(CredentialError::Token(JwtError::Malformed(
            "InvalidToken".to_string(),
        )));

        assert_eq!(expired, forged);
        assert_eq!(forged, malformed);
        assert!(matches!(expired, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::from(CredentialError::Password(PasswordError::HashingFailed(
            "out of memory".to_string(),
        )));

        assert_eq!(
            err,
            ApiError::InternalServerError("Internal server error".to_string())
        );
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        let err = ApiError::from(CredentialError::DuplicateEmail(
            "alice@example.com".to_string(),
        ));

        assert!(matches!(err, ApiError::Conflict(msg) if msg.contains("already exists")));
    }

    #[test]
    fn test_validation_errors_are_unprocessable() {
        assert!(matches!(
            ApiError::from(CredentialError::EmptyPassword),
            ApiError::UnprocessableEntity(_)
        ));
    }
}
