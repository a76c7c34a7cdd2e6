//! End-to-end tests driving the assembled router in-process.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

use crate::server::{
    config::Config,
    router::{build_app, registry},
    service::password::PasswordHasher,
    state::AppState,
};


struct TestApp {
    router: Router,
    db: DatabaseConnection,
    _context: TestContext,
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl TestResponse {
    /// `name=value` pair of the session cookie set by the response, if any.
    fn session_cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
    }
}

impl TestApp {
    async fn new() -> Self {
        let mut context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let store = context.session_store().await.unwrap();
        let db = context.db.clone().unwrap();

        let config = Config {
            bcrypt_cost: 4,
            ..Config::default()
        };
        let registry = registry().unwrap();
        let state = AppState::new(db.clone(), None, config, registry.module_names());
        let router = build_app(
            registry,
            state,
            SessionManagerLayer::new(store).with_secure(false),
        );

        Self {
            router,
            db,
            _context: context,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        self.send(request(Method::GET, uri, None, None)).await
    }

    async fn json(&self, method: Method, uri: &str, body: Value) -> TestResponse {
        self.send(request(method, uri, Some(body), None)).await
    }

    /// Inserts a user with a known password and logs them in, returning the cookie.
    async fn login_as(&self, role: &str, password: &str) -> (entity::user::Model, String) {
        let hash = PasswordHasher::new(4).hash(password).await.unwrap();
        let user = factory::user::UserFactory::new(&self.db)
            .role(role)
            .password_hash(hash)
            .build()
            .await
            .unwrap();

        let response = self
            .json(
                Method::POST,
                "/api/auth/login",
                json!({ "email": user.email, "password": password }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);

        let cookie = response.session_cookie().unwrap();
        (user, cookie)
    }
}

fn request(method: Method, uri: &str, body: Option<Value>, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(body) => {
            let bytes = serde_json::to_vec(&body).unwrap();
            builder
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, bytes.len())
                .body(Body::from(bytes))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Asserts the envelope shape and that `code` mirrors the HTTP status.
fn assert_envelope(response: &TestResponse, status: StatusCode, success: bool) {
    assert_eq!(response.status, status, "body: {}", response.body);
    assert_eq!(response.body["success"], success);
    assert_eq!(response.body["code"], status.as_u16());
    assert!(response.body["message"].is_string());
}
