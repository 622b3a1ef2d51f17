// Content setting HTTP routes
// Decision: PUT is an upsert keyed by the path segment

use crate::storage::StorageBackend;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use east_store_core::ContentSetting;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::{internal_error, not_found, ApiError, ErrorResponse, ListResponse};
use super::validation::validate_setting;
use crate::services::SettingService;

/// Request body for storing a setting value
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PutSettingRequest {
    #[schema(example = "Original paintings from the East coast")]
    pub value: String,
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SettingService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(SettingService::new(db)),
        }
    }
}

/// Create setting routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/settings", get(list_settings))
        .route(
            "/api/settings/:key",
            get(get_setting).put(put_setting).delete(delete_setting),
        )
        .with_state(state)
}

/// GET /api/settings - List all settings ordered by key
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "List of settings", body = ListResponse<ContentSetting>),
        (status = 500, description = "Internal server error")
    ),
    tag = "settings"
)]
pub async fn list_settings(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<ContentSetting>>, ApiError> {
    let settings = state
        .service
        .list()
        .await
        .map_err(|e| internal_error("list settings", e))?;

    Ok(Json(ListResponse::new(settings)))
}

/// GET /api/settings/{key} - Get a single setting
#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "Setting found", body = ContentSetting),
        (status = 404, description = "Setting not found", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "settings"
)]
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ContentSetting>, ApiError> {
    let setting = state
        .service
        .get(&key)
        .await
        .map_err(|e| internal_error("get setting", e))?
        .ok_or_else(|| not_found("Setting"))?;

    Ok(Json(setting))
}

/// PUT /api/settings/{key} - Create or replace a setting
#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    request_body = PutSettingRequest,
    responses(
        (status = 200, description = "Setting stored", body = ContentSetting),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "settings"
)]
pub async fn put_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<PutSettingRequest>,
) -> Result<Json<ContentSetting>, ApiError> {
    validate_setting(&key, &req.value)?;

    let setting = state
        .service
        .put(&key, &req.value)
        .await
        .map_err(|e| internal_error("store setting", e))?;

    Ok(Json(setting))
}

/// DELETE /api/settings/{key} - Delete a setting
#[utoipa::path(
    delete,
    path = "/api/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 204, description = "Setting deleted"),
        (status = 404, description = "Setting not found", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "settings"
)]
pub async fn delete_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .service
        .delete(&key)
        .await
        .map_err(|e| internal_error("delete setting", e))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Setting"))
    }
}
