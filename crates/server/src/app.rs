// Router assembly
// Decision: /health and the protected admin routes are never prefixed;
// API_PREFIX only applies to /api routes
// Decision: The session gate wraps the whole router so it also sees paths
// that match no route

use axum::{extract::State, middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::auth::{self, require_session_cookie, AuthState};
use crate::openapi::ApiDoc;
use crate::storage::StorageBackend;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    storage: &'static str,
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    storage: &'static str,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage,
    })
}

/// Build the complete application router
pub fn build_app(db: Arc<StorageBackend>, auth_state: AuthState, api_prefix: &str) -> Router {
    let health_state = HealthState {
        storage: if db.is_dev_mode() { "memory" } else { "postgres" },
    };

    let api_routes = Router::new()
        .merge(api::artworks::routes(api::artworks::AppState::new(db.clone())))
        .merge(api::settings::routes(api::settings::AppState::new(db.clone())))
        .merge(api::size_cards::routes(api::size_cards::AppState::new(db.clone())))
        .merge(auth::routes(auth_state.clone()));

    let admin_routes = api::admin::routes(api::admin::AppState::new(db));

    Router::new()
        .route("/health", get(health).with_state(health_state))
        .merge(build_router_with_prefix(api_routes, api_prefix))
        .merge(admin_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(
            auth_state,
            require_session_cookie,
        ))
}

/// Build router with optional API prefix
pub fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
