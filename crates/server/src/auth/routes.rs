// Authentication HTTP routes
// Decision: /api/auth/* for session endpoints, alongside the catalog API
// Decision: Login writes whatever token the verifier issues into the cookie

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use east_store_core::AdminIdentity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::middleware::{AuthError, AuthState};

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin@eaststore.com")]
    pub email: String,
    pub password: String,
}

/// Session check result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthCheckResponse {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminIdentity>,
}

impl AuthCheckResponse {
    pub fn authenticated(user: AdminIdentity) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }
}

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/api/auth/check", get(check_session))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .with_state(state)
}

/// GET /api/auth/check - Validate the session cookie
#[utoipa::path(
    get,
    path = "/api/auth/check",
    responses(
        (status = 200, description = "Session is valid", body = AuthCheckResponse),
        (status = 401, description = "Cookie missing or not the session credential", body = AuthCheckResponse)
    ),
    tag = "auth"
)]
pub async fn check_session(
    State(state): State<AuthState>,
    jar: CookieJar,
) -> (StatusCode, Json<AuthCheckResponse>) {
    let Some(token) = state.session_cookie(&jar) else {
        tracing::debug!("Session check without cookie");
        return (
            StatusCode::UNAUTHORIZED,
            Json(AuthCheckResponse::unauthenticated()),
        );
    };

    match state.verifier.verify(token).await {
        Some(user) => {
            tracing::debug!(user_id = %user.id, "Session check passed");
            (StatusCode::OK, Json(AuthCheckResponse::authenticated(user)))
        }
        None => {
            tracing::info!("Session check with unrecognized cookie value");
            (
                StatusCode::UNAUTHORIZED,
                Json(AuthCheckResponse::unauthenticated()),
            )
        }
    }
}

/// POST /api/auth/login - Login with the admin email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = AuthCheckResponse),
        (status = 401, description = "Invalid email or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthCheckResponse>), AuthError> {
    let Some(admin) = &state.config.admin else {
        tracing::warn!("Login attempted but no admin credentials are configured");
        return Err(AuthError::unauthorized("Invalid email or password"));
    };

    if !admin.matches(&req.email, &req.password) {
        tracing::info!("Login rejected");
        return Err(AuthError::unauthorized("Invalid email or password"));
    }

    let identity = state.config.identity.clone();
    let token = state.verifier.issue(&identity).await;
    let max_age = i64::try_from(state.config.session_max_age.as_secs()).unwrap_or(i64::MAX);
    let cookie = Cookie::build((state.config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(state.config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age))
        .build();

    tracing::info!(email = %admin.email, "Admin logged in");

    Ok((
        jar.add(cookie),
        Json(AuthCheckResponse::authenticated(identity)),
    ))
}

/// POST /api/auth/logout - Remove the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Session cookie removed")
    ),
    tag = "auth"
)]
pub async fn logout(State(state): State<AuthState>, jar: CookieJar) -> (StatusCode, CookieJar) {
    let jar = jar.remove(Cookie::build((state.config.cookie_name.clone(), "")).path("/"));
    (StatusCode::NO_CONTENT, jar)
}
