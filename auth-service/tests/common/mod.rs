use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::AuthSettings;
use auth::Authenticator;
use auth_service::domain::credential::errors::CredentialError;
use auth_service::domain::credential::models::Credential;
use auth_service::domain::credential::models::EmailAddress;
use auth_service::domain::credential::ports::CredentialRepository;
use auth_service::domain::credential::service::AuthService;
use auth_service::inbound::http::router::create_router;
use axum::body::to_bytes;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Credential store keyed by email, standing in for Postgres.
#[derive(Default)]
pub struct InMemoryCredentialRepository {
    credentials: Mutex<HashMap<String, Credential>>,
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, CredentialError> {
        let credentials = self
            .credentials
            .lock()
            .map_err(|e| CredentialError::Database(e.to_string()))?;
        Ok(credentials.get(email.as_str()).cloned())
    }

    async fn insert(&self, credential: Credential) -> Result<Credential, CredentialError> {
        let mut credentials = self
            .credentials
            .lock()
            .map_err(|e| CredentialError::Database(e.to_string()))?;

        if credentials.contains_key(credential.email.as_str()) {
            return Err(CredentialError::DuplicateEmail(credential.email.to_string()));
        }

        credentials.insert(credential.email.as_str().to_string(), credential.clone());
        Ok(credential)
    }
}

/// Router wired to the real service and core over an in-memory store
pub struct TestApp {
    router: Router,
    pub repository: Arc<InMemoryCredentialRepository>,
}

impl TestApp {
    pub fn spawn() -> Self {
        let settings = AuthSettings::new(TEST_SECRET).with_hash_cost(1);
        let authenticator =
            Arc::new(Authenticator::new(&settings).expect("Failed to build authenticator"));
        let repository = Arc::new(InMemoryCredentialRepository::default());
        let auth_service = Arc::new(AuthService::new(Arc::clone(&repository), authenticator));

        Self {
            router: create_router(auth_service),
            repository,
        }
    }

    /// Helper to send a JSON POST request
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Helper to send a GET request with an optional Authorization header
    pub async fn get(&self, path: &str, authorization: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::GET).uri(path);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = builder
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Register an account and return the response data
    pub async fn register(&self, email: &str, password: &str) -> Value {
        let (status, body) = self
            .post(
                "/auth/register",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "name": "Test User"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
        body["data"].clone()
    }

    /// Log in and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/auth/login",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["data"]["token"]
            .as_str()
            .expect("token missing")
            .to_string()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
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
