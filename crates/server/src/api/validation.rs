// Input validation for catalog APIs
//
// Hard limits, not configurable. Values allow any realistic storefront
// content while keeping single requests bounded.

use super::common::ErrorResponse;
use axum::http::StatusCode;
use axum::Json;
use east_store_core::size_card::first_ragged_row;

// =============================================================================
// Input Size Limits
// =============================================================================

/// Maximum size for artwork titles and size-card names.
pub const MAX_TITLE_BYTES: usize = 512;

/// Maximum size for description fields.
pub const MAX_DESCRIPTION_BYTES: usize = 10 * 1024; // 10 KB

/// Maximum size for image URLs.
pub const MAX_IMAGE_URL_BYTES: usize = 2 * 1024; // 2 KB

/// Maximum number of tags on an artwork.
pub const MAX_TAGS: usize = 50;

/// Maximum size for a content setting key.
pub const MAX_SETTING_KEY_BYTES: usize = 128;

/// Maximum size for a content setting value.
pub const MAX_SETTING_VALUE_BYTES: usize = 64 * 1024; // 64 KB

/// Maximum number of columns in a size card.
pub const MAX_SIZE_CARD_COLUMNS: usize = 32;

/// Maximum number of rows in a size card.
pub const MAX_SIZE_CARD_ROWS: usize = 200;

/// Generic validation error message returned to clients.
/// Intentionally vague to avoid leaking which field exceeded limits.
pub const VALIDATION_ERROR_MESSAGE: &str = "Input exceeds allowed limits";

/// Message for a size card whose rows disagree with its columns.
pub const RAGGED_TABLE_MESSAGE: &str = "every row must have one cell per column";

// =============================================================================
// Validation Functions
// =============================================================================

/// Validation error with the message returned to the client
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError(pub &'static str);

impl ValidationError {
    fn limits() -> Self {
        Self(VALIDATION_ERROR_MESSAGE)
    }
}

impl From<ValidationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ValidationError) -> Self {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.0)))
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.len() > max {
        tracing::warn!(
            "{} exceeds limit: {} bytes (max: {})",
            field,
            value.len(),
            max
        );
        return Err(ValidationError::limits());
    }
    Ok(())
}

fn check_required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError(message));
    }
    Ok(())
}

/// Validate all fields for CreateArtworkRequest
pub fn validate_create_artwork_input(
    title: &str,
    description: Option<&str>,
    image_url: &str,
    tags_count: usize,
) -> Result<(), ValidationError> {
    check_required(title, "title is required")?;
    check_required(image_url, "image_url is required")?;
    validate_update_artwork_input(Some(title), description, Some(image_url), Some(tags_count))
}

/// Validate all provided fields for UpdateArtworkRequest
pub fn validate_update_artwork_input(
    title: Option<&str>,
    description: Option<&str>,
    image_url: Option<&str>,
    tags_count: Option<usize>,
) -> Result<(), ValidationError> {
    if let Some(title) = title {
        check_required(title, "title is required")?;
        check_len("Artwork title", title, MAX_TITLE_BYTES)?;
    }
    if let Some(desc) = description {
        check_len("Artwork description", desc, MAX_DESCRIPTION_BYTES)?;
    }
    if let Some(url) = image_url {
        check_required(url, "image_url is required")?;
        check_len("Artwork image URL", url, MAX_IMAGE_URL_BYTES)?;
    }
    if let Some(count) = tags_count {
        if count > MAX_TAGS {
            tracing::warn!("Artwork tags count exceeds limit: {} (max: {})", count, MAX_TAGS);
            return Err(ValidationError::limits());
        }
    }
    Ok(())
}

/// Validate a content setting key and value
pub fn validate_setting(key: &str, value: &str) -> Result<(), ValidationError> {
    if key.trim().is_empty() {
        return Err(ValidationError("key is required"));
    }
    check_len("Setting key", key, MAX_SETTING_KEY_BYTES)?;
    check_len("Setting value", value, MAX_SETTING_VALUE_BYTES)?;
    Ok(())
}

/// Validate the table shape of a size card
pub fn validate_size_card_table(
    columns: &[String],
    rows: &[Vec<String>],
) -> Result<(), ValidationError> {
    validate_size_card_limits(Some(columns.len()), Some(rows.len()))?;
    if let Some(index) = first_ragged_row(columns, rows) {
        tracing::debug!(row = index, columns = columns.len(), "Ragged size card row");
        return Err(ValidationError(RAGGED_TABLE_MESSAGE));
    }
    Ok(())
}

/// Validate the table dimensions that a request provides
pub fn validate_size_card_limits(
    columns: Option<usize>,
    rows: Option<usize>,
) -> Result<(), ValidationError> {
    let columns = columns.unwrap_or(0);
    let rows = rows.unwrap_or(0);
    if columns > MAX_SIZE_CARD_COLUMNS || rows > MAX_SIZE_CARD_ROWS {
        tracing::warn!(
            "Size card table exceeds limit: {} columns x {} rows (max: {} x {})",
            columns,
            rows,
            MAX_SIZE_CARD_COLUMNS,
            MAX_SIZE_CARD_ROWS
        );
        return Err(ValidationError::limits());
    }
    Ok(())
}

/// Validate the scalar fields of a size card
pub fn validate_size_card_fields(
    name: Option<&str>,
    description: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        check_required(name, "name is required")?;
        check_len("Size card name", name, MAX_TITLE_BYTES)?;
    }
    if let Some(desc) = description {
        check_len("Size card description", desc, MAX_DESCRIPTION_BYTES)?;
    }
    Ok(())
}
