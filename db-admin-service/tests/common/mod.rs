use std::sync::Arc;

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use db_admin_service::domain::database::errors::DatabaseAdminError;
use db_admin_service::domain::database::ports::DatabaseCatalog;
use db_admin_service::domain::database::service::DatabaseAdminService;
use db_admin_service::inbound::http::router::create_router;
use serde_json::Value;
use tower::ServiceExt;

/// Catalog with a fixed answer, standing in for Postgres.
pub enum StubCatalog {
    Reachable(Vec<String>),
    Unreachable,
    Broken,
}

#[async_trait]
impl DatabaseCatalog for StubCatalog {
    async fn list_database_names(&self) -> Result<Vec<String>, DatabaseAdminError> {
        match self {
            StubCatalog::Reachable(names) => Ok(names.clone()),
            StubCatalog::Unreachable => Err(DatabaseAdminError::Unavailable(
                "pool timed out while waiting for an open connection".to_string(),
            )),
            StubCatalog::Broken => Err(DatabaseAdminError::Database(
                "permission denied for table pg_database".to_string(),
            )),
        }
    }

    async fn ping(&self) -> Result<(), DatabaseAdminError> {
        match self {
            StubCatalog::Unreachable => Err(DatabaseAdminError::Unavailable(
                "connection refused".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn spawn(catalog: StubCatalog) -> Self {
        let admin_service = Arc::new(DatabaseAdminService::new(Arc::new(catalog)));

        Self {
            router: create_router(admin_service),
        }
    }

    /// Helper to send a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }
}
