// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// Artwork models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct ArtworkRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateArtworkRow {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateArtwork {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
}

// ============================================
// Content setting models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct ContentSettingRow {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

// ============================================
// Size-card template models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct SizeCardRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub column_labels: Json<Vec<String>>,
    pub row_cells: Json<Vec<Vec<String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateSizeCardRow {
    pub name: String,
    pub description: Option<String>,
    pub column_labels: Vec<String>,
    pub row_cells: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSizeCard {
    pub name: Option<String>,
    pub description: Option<String>,
    pub column_labels: Option<Vec<String>>,
    pub row_cells: Option<Vec<Vec<String>>>,
}
