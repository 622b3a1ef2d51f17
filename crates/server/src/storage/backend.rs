// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either PostgreSQL (production) or in-memory (dev mode) storage.

use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryDatabase::new()))
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    // ============================================
    // Artworks
    // ============================================

    pub async fn create_artwork(&self, input: CreateArtworkRow) -> Result<ArtworkRow> {
        match self {
            Self::Postgres(db) => db.create_artwork(input).await,
            Self::InMemory(db) => db.create_artwork(input).await,
        }
    }

    pub async fn get_artwork(&self, id: Uuid) -> Result<Option<ArtworkRow>> {
        match self {
            Self::Postgres(db) => db.get_artwork(id).await,
            Self::InMemory(db) => db.get_artwork(id).await,
        }
    }

    pub async fn list_artworks(&self, featured: Option<bool>) -> Result<Vec<ArtworkRow>> {
        match self {
            Self::Postgres(db) => db.list_artworks(featured).await,
            Self::InMemory(db) => db.list_artworks(featured).await,
        }
    }

    pub async fn update_artwork(&self, id: Uuid, input: UpdateArtwork) -> Result<Option<ArtworkRow>> {
        match self {
            Self::Postgres(db) => db.update_artwork(id, input).await,
            Self::InMemory(db) => db.update_artwork(id, input).await,
        }
    }

    pub async fn delete_artwork(&self, id: Uuid) -> Result<bool> {
        match self {
            Self::Postgres(db) => db.delete_artwork(id).await,
            Self::InMemory(db) => db.delete_artwork(id).await,
        }
    }

    pub async fn count_artworks(&self, featured_only: bool) -> Result<i64> {
        match self {
            Self::Postgres(db) => db.count_artworks(featured_only).await,
            Self::InMemory(db) => db.count_artworks(featured_only).await,
        }
    }

    // ============================================
    // Content settings
    // ============================================

    pub async fn list_settings(&self) -> Result<Vec<ContentSettingRow>> {
        match self {
            Self::Postgres(db) => db.list_settings().await,
            Self::InMemory(db) => db.list_settings().await,
        }
    }

    pub async fn get_setting(&self, key: &str) -> Result<Option<ContentSettingRow>> {
        match self {
            Self::Postgres(db) => db.get_setting(key).await,
            Self::InMemory(db) => db.get_setting(key).await,
        }
    }

    pub async fn upsert_setting(&self, key: &str, value: &str) -> Result<ContentSettingRow> {
        match self {
            Self::Postgres(db) => db.upsert_setting(key, value).await,
            Self::InMemory(db) => db.upsert_setting(key, value).await,
        }
    }

    pub async fn delete_setting(&self, key: &str) -> Result<bool> {
        match self {
            Self::Postgres(db) => db.delete_setting(key).await,
            Self::InMemory(db) => db.delete_setting(key).await,
        }
    }

    pub async fn count_settings(&self) -> Result<i64> {
        match self {
            Self::Postgres(db) => db.count_settings().await,
            Self::InMemory(db) => db.count_settings().await,
        }
    }

    // ============================================
    // Size-card templates
    // ============================================

    pub async fn create_size_card(&self, input: CreateSizeCardRow) -> Result<SizeCardRow> {
        match self {
            Self::Postgres(db) => db.create_size_card(input).await,
            Self::InMemory(db) => db.create_size_card(input).await,
        }
    }

    pub async fn get_size_card(&self, id: Uuid) -> Result<Option<SizeCardRow>> {
        match self {
            Self::Postgres(db) => db.get_size_card(id).await,
            Self::InMemory(db) => db.get_size_card(id).await,
        }
    }

    pub async fn list_size_cards(&self) -> Result<Vec<SizeCardRow>> {
        match self {
            Self::Postgres(db) => db.list_size_cards().await,
            Self::InMemory(db) => db.list_size_cards().await,
        }
    }

    pub async fn update_size_card(&self, id: Uuid, input: UpdateSizeCard) -> Result<Option<SizeCardRow>> {
        match self {
            Self::Postgres(db) => db.update_size_card(id, input).await,
            Self::InMemory(db) => db.update_size_card(id, input).await,
        }
    }

    pub async fn delete_size_card(&self, id: Uuid) -> Result<bool> {
        match self {
            Self::Postgres(db) => db.delete_size_card(id).await,
            Self::InMemory(db) => db.delete_size_card(id).await,
        }
    }

    pub async fn count_size_cards(&self) -> Result<i64> {
        match self {
            Self::Postgres(db) => db.count_size_cards().await,
            Self::InMemory(db) => db.count_size_cards().await,
        }
    }
}
