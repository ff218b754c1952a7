use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::database::models::ConnectionStatus;
use crate::domain::database::ports::DatabaseAdminServicePort;
use crate::inbound::http::router::AppState;

pub async fn test_connection<S: DatabaseAdminServicePort>(
    State(state): State<AppState<S>>,
) -> Result<ApiSuccess<ConnectionResponseData>, ApiError> {
    state
        .admin_service
        .test_connection()
        .await
        .map_err(ApiError::from)
        .map(|status| ApiSuccess::new(StatusCode::OK, ConnectionResponseData::from(&status)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionResponseData {
    pub connected: bool,
    pub message: String,
    pub latency_ms: u64,
}

impl From<&ConnectionStatus> for ConnectionResponseData {
    fn from(status: &ConnectionStatus) -> Self {
        Self {
            connected: true,
            message: "Successfully connected to database server".to_string(),
            latency_ms: u64::try_from(status.latency.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
