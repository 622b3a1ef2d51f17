// Shared helpers for in-process router tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use east_store_server::{
    auth::{AdminCredentials, AuthConfig, AuthState},
    build_app,
    storage::StorageBackend,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const SESSION_TOKEN: &str = "test-session-token";
pub const ADMIN_EMAIL: &str = "owner@eaststore.com";
pub const ADMIN_PASSWORD: &str = "correct horse";

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        session_token: SESSION_TOKEN.to_string(),
        cookie_secure: false,
        admin: Some(AdminCredentials {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        }),
        ..Default::default()
    }
}

/// App over a fresh in-memory backend
pub fn test_app() -> Router {
    test_app_with(auth_config())
}

pub fn test_app_with(config: AuthConfig) -> Router {
    build_app(
        Arc::new(StorageBackend::in_memory()),
        AuthState::new(config),
        "",
    )
}

pub fn session_cookie(value: &str) -> String {
    format!("east_admin_token={}", value)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Router call failed")
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

/// Send a JSON request and return status plus parsed body (Null when empty)
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = send(app, method, uri, None, body).await;
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    };
    (status, json)
}
