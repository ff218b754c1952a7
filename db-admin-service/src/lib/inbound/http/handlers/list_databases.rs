use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::database::ports::DatabaseAdminServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_databases<S: DatabaseAdminServicePort>(
    State(state): State<AppState<S>>,
    Query(params): Query<ListDatabasesParams>,
) -> Result<ApiSuccess<Vec<String>>, ApiError> {
    state
        .admin_service
        .list_databases(params.exclude_system)
        .await
        .map_err(ApiError::from)
        .map(|names| {
            ApiSuccess::new(
                StatusCode::OK,
                names.into_iter().map(|name| name.as_str().to_string()).collect(),
            )
        })
}

/// Query string of the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListDatabasesParams {
    #[serde(default = "exclude_system_default", alias = "excludeSystem")]
    pub exclude_system: bool,
}

fn exclude_system_default() -> bool {
    true
}
