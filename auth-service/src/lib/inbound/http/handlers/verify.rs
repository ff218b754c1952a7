use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Reached only through the bearer middleware, so the token is already verified.
pub async fn verify(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<VerifyResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        VerifyResponseData {
            valid: true,
            user_id: user.user_id,
            expires_at: user.expires_at,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResponseData {
    pub valid: bool,
    pub user_id: String,
    pub expires_at: Option<DateTime<Utc>>,
}
