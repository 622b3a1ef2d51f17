// Size-card template HTTP routes
// Decision: Names are unique; duplicates surface as 409 Conflict
// Decision: PATCH checks request-level limits here; the merged table is
// checked by storage while the card is locked

use crate::storage::StorageBackend;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use east_store_core::{SizeCardTemplate, StoreError};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::{internal_error, not_found, ApiError, ErrorResponse, ListResponse};
use super::validation::{
    validate_size_card_fields, validate_size_card_limits, validate_size_card_table,
};
use crate::services::SizeCardService;

/// Request to create a size-card template
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSizeCardRequest {
    /// Unique template name.
    #[schema(example = "T-shirt (unisex)")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Column headers.
    #[schema(example = json!(["Size", "Chest (cm)", "Length (cm)"]))]
    pub columns: Vec<String>,
    /// Table body; every row has one cell per column.
    #[serde(default)]
    #[schema(example = json!([["S", "88", "68"], ["M", "96", "71"]]))]
    pub rows: Vec<Vec<String>>,
}

/// Request to update a size-card template. Only provided fields will be updated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateSizeCardRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub columns: Option<Vec<String>>,
    pub rows: Option<Vec<Vec<String>>>,
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SizeCardService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(SizeCardService::new(db)),
        }
    }
}

/// Create size-card routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/size-cards", get(list_size_cards).post(create_size_card))
        .route(
            "/api/size-cards/:size_card_id",
            get(get_size_card)
                .patch(update_size_card)
                .delete(delete_size_card),
        )
        .with_state(state)
}

/// Map a storage error: name conflicts become 409, ragged tables 400
fn storage_error(action: &str, err: anyhow::Error) -> ApiError {
    let Some(rejected) = err.downcast_ref::<StoreError>() else {
        return internal_error(action, err);
    };
    tracing::debug!("Rejected {}: {}", action, rejected);
    let status = match rejected {
        StoreError::Conflict { .. } => StatusCode::CONFLICT,
        StoreError::RaggedTable { .. } => StatusCode::BAD_REQUEST,
    };
    ErrorResponse::new(rejected.to_string()).into_response(status)
}

/// POST /api/size-cards - Create a size-card template
#[utoipa::path(
    post,
    path = "/api/size-cards",
    request_body = CreateSizeCardRequest,
    responses(
        (status = 201, description = "Size card created successfully", body = SizeCardTemplate),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "size-cards"
)]
pub async fn create_size_card(
    State(state): State<AppState>,
    Json(req): Json<CreateSizeCardRequest>,
) -> Result<(StatusCode, Json<SizeCardTemplate>), ApiError> {
    validate_size_card_fields(Some(&req.name), req.description.as_deref())?;
    validate_size_card_table(&req.columns, &req.rows)?;

    let card = state
        .service
        .create(req)
        .await
        .map_err(|e| storage_error("create size card", e))?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// GET /api/size-cards - List size-card templates ordered by name
#[utoipa::path(
    get,
    path = "/api/size-cards",
    responses(
        (status = 200, description = "List of size cards", body = ListResponse<SizeCardTemplate>),
        (status = 500, description = "Internal server error")
    ),
    tag = "size-cards"
)]
pub async fn list_size_cards(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<SizeCardTemplate>>, ApiError> {
    let cards = state
        .service
        .list()
        .await
        .map_err(|e| internal_error("list size cards", e))?;

    Ok(Json(ListResponse::new(cards)))
}

/// GET /api/size-cards/{size_card_id} - Get a size-card template
#[utoipa::path(
    get,
    path = "/api/size-cards/{size_card_id}",
    params(
        ("size_card_id" = Uuid, Path, description = "Size card ID")
    ),
    responses(
        (status = 200, description = "Size card found", body = SizeCardTemplate),
        (status = 404, description = "Size card not found", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "size-cards"
)]
pub async fn get_size_card(
    State(state): State<AppState>,
    Path(size_card_id): Path<Uuid>,
) -> Result<Json<SizeCardTemplate>, ApiError> {
    let card = state
        .service
        .get(size_card_id)
        .await
        .map_err(|e| internal_error("get size card", e))?
        .ok_or_else(|| not_found("Size card"))?;

    Ok(Json(card))
}

/// PATCH /api/size-cards/{size_card_id} - Update a size-card template
#[utoipa::path(
    patch,
    path = "/api/size-cards/{size_card_id}",
    params(
        ("size_card_id" = Uuid, Path, description = "Size card ID")
    ),
    request_body = UpdateSizeCardRequest,
    responses(
        (status = 200, description = "Size card updated successfully", body = SizeCardTemplate),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Size card not found", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "size-cards"
)]
pub async fn update_size_card(
    State(state): State<AppState>,
    Path(size_card_id): Path<Uuid>,
    Json(req): Json<UpdateSizeCardRequest>,
) -> Result<Json<SizeCardTemplate>, ApiError> {
    validate_size_card_fields(req.name.as_deref(), req.description.as_deref())?;
    validate_size_card_limits(
        req.columns.as_ref().map(Vec::len),
        req.rows.as_ref().map(Vec::len),
    )?;

    let card = state
        .service
        .update(size_card_id, req)
        .await
        .map_err(|e| storage_error("update size card", e))?
        .ok_or_else(|| not_found("Size card"))?;

    Ok(Json(card))
}

/// DELETE /api/size-cards/{size_card_id} - Delete a size-card template
#[utoipa::path(
    delete,
    path = "/api/size-cards/{size_card_id}",
    params(
        ("size_card_id" = Uuid, Path, description = "Size card ID")
    ),
    responses(
        (status = 204, description = "Size card deleted"),
        (status = 404, description = "Size card not found", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "size-cards"
)]
pub async fn delete_size_card(
    State(state): State<AppState>,
    Path(size_card_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .service
        .delete(size_card_id)
        .await
        .map_err(|e| internal_error("delete size card", e))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Size card"))
    }
}
