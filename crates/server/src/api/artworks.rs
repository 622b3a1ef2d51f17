// Artwork CRUD HTTP routes

use crate::storage::StorageBackend;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use east_store_core::Artwork;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::common::{internal_error, not_found, ApiError, ErrorResponse, ListResponse};
use super::validation::{validate_create_artwork_input, validate_update_artwork_input};
use crate::services::ArtworkService;

/// Request to create a new artwork
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateArtworkRequest {
    /// Display title.
    #[schema(example = "Morning over the river")]
    pub title: String,
    /// Optional long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// URL of the hosted image.
    #[schema(example = "https://images.eaststore.com/art/morning.jpg")]
    pub image_url: String,
    /// Tags for filtering in the gallery.
    #[serde(default)]
    #[schema(example = json!(["landscape", "oil"]))]
    pub tags: Vec<String>,
    /// Whether the artwork is shown on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Position in the gallery; lower values come first.
    #[serde(default)]
    pub sort_order: i32,
}

/// Request to update an artwork. Only provided fields will be updated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateArtworkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Query parameters for listing artworks
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListArtworksQuery {
    /// Only return featured (true) or non-featured (false) artworks
    pub featured: Option<bool>,
}

/// App state for artwork routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ArtworkService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(ArtworkService::new(db)),
        }
    }
}

/// Create artwork routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/artworks", get(list_artworks).post(create_artwork))
        .route(
            "/api/artworks/:artwork_id",
            get(get_artwork).patch(update_artwork).delete(delete_artwork),
        )
        .with_state(state)
}

/// POST /api/artworks - Create a new artwork
#[utoipa::path(
    post,
    path = "/api/artworks",
    request_body = CreateArtworkRequest,
    responses(
        (status = 201, description = "Artwork created successfully", body = Artwork),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "artworks"
)]
pub async fn create_artwork(
    State(state): State<AppState>,
    Json(req): Json<CreateArtworkRequest>,
) -> Result<(StatusCode, Json<Artwork>), ApiError> {
    validate_create_artwork_input(
        &req.title,
        req.description.as_deref(),
        &req.image_url,
        req.tags.len(),
    )?;

    let artwork = state
        .service
        .create(req)
        .await
        .map_err(|e| internal_error("create artwork", e))?;

    Ok((StatusCode::CREATED, Json(artwork)))
}

/// GET /api/artworks - List artworks in gallery order
#[utoipa::path(
    get,
    path = "/api/artworks",
    params(ListArtworksQuery),
    responses(
        (status = 200, description = "List of artworks", body = ListResponse<Artwork>),
        (status = 500, description = "Internal server error")
    ),
    tag = "artworks"
)]
pub async fn list_artworks(
    State(state): State<AppState>,
    Query(query): Query<ListArtworksQuery>,
) -> Result<Json<ListResponse<Artwork>>, ApiError> {
    let artworks = state
        .service
        .list(query.featured)
        .await
        .map_err(|e| internal_error("list artworks", e))?;

    Ok(Json(ListResponse::new(artworks)))
}

/// GET /api/artworks/{artwork_id} - Get artwork by ID
#[utoipa::path(
    get,
    path = "/api/artworks/{artwork_id}",
    params(
        ("artwork_id" = Uuid, Path, description = "Artwork ID")
    ),
    responses(
        (status = 200, description = "Artwork found", body = Artwork),
        (status = 404, description = "Artwork not found", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "artworks"
)]
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
) -> Result<Json<Artwork>, ApiError> {
    let artwork = state
        .service
        .get(artwork_id)
        .await
        .map_err(|e| internal_error("get artwork", e))?
        .ok_or_else(|| not_found("Artwork"))?;

    Ok(Json(artwork))
}

/// PATCH /api/artworks/{artwork_id} - Update artwork
#[utoipa::path(
    patch,
    path = "/api/artworks/{artwork_id}",
    params(
        ("artwork_id" = Uuid, Path, description = "Artwork ID")
    ),
    request_body = UpdateArtworkRequest,
    responses(
        (status = 200, description = "Artwork updated successfully", body = Artwork),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Artwork not found", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "artworks"
)]
pub async fn update_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
    Json(req): Json<UpdateArtworkRequest>,
) -> Result<Json<Artwork>, ApiError> {
    validate_update_artwork_input(
        req.title.as_deref(),
        req.description.as_deref(),
        req.image_url.as_deref(),
        req.tags.as_ref().map(Vec::len),
    )?;

    let artwork = state
        .service
        .update(artwork_id, req)
        .await
        .map_err(|e| internal_error("update artwork", e))?
        .ok_or_else(|| not_found("Artwork"))?;

    Ok(Json(artwork))
}

/// DELETE /api/artworks/{artwork_id} - Delete artwork
#[utoipa::path(
    delete,
    path = "/api/artworks/{artwork_id}",
    params(
        ("artwork_id" = Uuid, Path, description = "Artwork ID")
    ),
    responses(
        (status = 204, description = "Artwork deleted"),
        (status = 404, description = "Artwork not found", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "artworks"
)]
pub async fn delete_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .service
        .delete(artwork_id)
        .await
        .map_err(|e| internal_error("delete artwork", e))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Artwork"))
    }
}
