// Admin landing route
// Sits under the protected prefix, so it is only reached with a session cookie

use crate::storage::StorageBackend;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::{internal_error, ApiError};
use crate::services::OverviewService;

/// Catalog counts shown on the admin dashboard
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminOverview {
    /// Total number of artworks.
    pub artworks: i64,
    /// Artworks flagged as featured.
    pub featured_artworks: i64,
    /// Stored content settings.
    pub settings: i64,
    /// Size-card templates.
    pub size_cards: i64,
    /// Active storage backend ("postgres" or "memory").
    #[schema(example = "postgres")]
    pub storage: String,
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<OverviewService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(OverviewService::new(db)),
        }
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/admin", get(get_overview))
        .with_state(state)
}

/// GET /admin - Admin dashboard overview
#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Catalog overview", body = AdminOverview),
        (status = 307, description = "No session cookie; redirected to the login page"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn get_overview(State(state): State<AppState>) -> Result<Json<AdminOverview>, ApiError> {
    let overview = state
        .service
        .overview()
        .await
        .map_err(|e| internal_error("load admin overview", e))?;

    Ok(Json(overview))
}
