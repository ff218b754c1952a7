use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::list_databases::list_databases;
use super::handlers::test_connection::test_connection;
use crate::domain::database::ports::DatabaseAdminServicePort;

pub struct AppState<S: DatabaseAdminServicePort> {
    pub admin_service: Arc<S>,
}

impl<S: DatabaseAdminServicePort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            admin_service: Arc::clone(&self.admin_service),
        }
    }
}

pub fn create_router<S: DatabaseAdminServicePort>(admin_service: Arc<S>) -> Router {
    let state = AppState { admin_service };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/v1/database-management/list", get(list_databases::<S>))
        .route(
            "/v1/database-management/test-connection",
            get(test_connection::<S>),
        )
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
