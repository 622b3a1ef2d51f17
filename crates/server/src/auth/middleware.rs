// Authentication middleware and shared auth state
// Decision: The gate only checks that the session cookie is present.
// The check endpoint compares the value. The two intentionally differ until
// the product decides whether the gate should validate too.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use std::sync::Arc;

use super::{
    config::AuthConfig,
    credential::{CredentialVerifier, StaticTokenVerifier},
};

/// Authentication error
#[derive(Debug, Clone, Serialize)]
pub struct AuthError {
    pub error: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl AuthError {
    pub fn unauthorized(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Auth state shared across the gate and auth routes
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AuthConfig>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AuthState {
    /// Build state with the static token verifier from config
    pub fn new(config: AuthConfig) -> Self {
        let verifier = Arc::new(StaticTokenVerifier::new(
            config.session_token.clone(),
            config.identity.clone(),
        ));
        Self::with_verifier(config, verifier)
    }

    pub fn with_verifier(config: AuthConfig, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            config: Arc::new(config),
            verifier,
        }
    }

    /// Read the session cookie value, if any
    pub fn session_cookie<'a>(&self, jar: &'a CookieJar) -> Option<&'a str> {
        jar.get(&self.config.cookie_name).map(|c| c.value())
    }
}

/// Request gate for the protected prefix
///
/// Paths outside the prefix pass straight through. Inside it, a request
/// without the session cookie is redirected (307) to the login path and a
/// request with the cookie is forwarded unchanged, whatever the value.
pub async fn require_session_cookie(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    tracing::debug!(method = %request.method(), path = %path, "Gate observed request");

    if !state.config.is_protected(path) {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    if state.session_cookie(&jar).is_none() {
        tracing::warn!(
            path = %path,
            login_path = %state.config.login_path,
            "No session cookie, redirecting to login"
        );
        return Redirect::temporary(&state.config.login_path).into_response();
    }

    tracing::info!(path = %path, "Session cookie present, admitting request");
    next.run(request).await
}
