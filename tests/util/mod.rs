//! Helpers for building the application state and reading responses in integration tests.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Response},
    Router,
};
use registrar::server::{
    config::GoogleSettings,
    model::{app::AppState, auth::AdminCredentials},
    router,
    startup::session_layer,
    util::google::GoogleClient,
};
use registrar_test_utils::{
    constant::{TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME},
    TestContext,
};
use tower_sessions::MemoryStore;

/// Extension trait for building application state from a [`TestContext`]
pub trait TestContextExt {
    fn app_state(&self) -> AppState;

    /// Full router with an in-memory session layer
    fn app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        let settings = GoogleSettings {
            client_id: self.google.client_id.clone(),
            client_secret: self.google.client_secret.clone(),
            callback_url: self.google.callback_url.clone(),
            auth_url: self.google.auth_url.clone(),
            token_url: self.google.token_url.clone(),
            userinfo_url: self.google.userinfo_url.clone(),
        };

        AppState {
            db: self.db.clone(),
            google: GoogleClient::new(&settings).unwrap(),
            admin: Arc::new(AdminCredentials {
                username: TEST_ADMIN_USERNAME.to_string(),
                password: TEST_ADMIN_PASSWORD.to_string(),
            }),
        }
    }

    fn app(&self) -> Router {
        router::routes()
            .with_state(self.app_state())
            .layer(session_layer(MemoryStore::default(), false))
    }
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(resp: &Response<Body>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

/// The `name=value` pair of the session cookie set by the response, if any
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookie| cookie.split(';').next())
        .map(str::to_string)
}
