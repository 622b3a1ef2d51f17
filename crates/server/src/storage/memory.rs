// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: UUIDs generated via uuid v7 (time-ordered)
//
// This implementation mirrors the PostgreSQL repository API backed by in-memory
// maps, allowing the server to run (and be tested) without a database.

use anyhow::Result;
use chrono::{DateTime, Utc};
use east_store_core::{size_card::ensure_rectangular, StoreError};
use parking_lot::RwLock;
use sqlx::types::Json;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use super::models::*;

/// In-memory database for dev mode
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    artworks: RwLock<HashMap<Uuid, ArtworkRow>>,
    // BTreeMap keeps settings ordered by key
    settings: RwLock<BTreeMap<String, ContentSettingRow>>,
    size_cards: RwLock<HashMap<Uuid, SizeCardRow>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    // ============================================
    // Artworks
    // ============================================

    pub async fn create_artwork(&self, input: CreateArtworkRow) -> Result<ArtworkRow> {
        let now = Self::now();
        let id = Uuid::now_v7();
        let row = ArtworkRow {
            id,
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            tags: input.tags,
            featured: input.featured,
            sort_order: input.sort_order,
            created_at: now,
            updated_at: now,
        };
        self.artworks.write().insert(id, row.clone());
        Ok(row)
    }

    pub async fn get_artwork(&self, id: Uuid) -> Result<Option<ArtworkRow>> {
        Ok(self.artworks.read().get(&id).cloned())
    }

    pub async fn list_artworks(&self, featured: Option<bool>) -> Result<Vec<ArtworkRow>> {
        let mut result: Vec<_> = self
            .artworks
            .read()
            .values()
            .filter(|a| featured.map_or(true, |f| a.featured == f))
            .cloned()
            .collect();
        result.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(result)
    }

    pub async fn update_artwork(&self, id: Uuid, input: UpdateArtwork) -> Result<Option<ArtworkRow>> {
        let mut artworks = self.artworks.write();
        if let Some(artwork) = artworks.get_mut(&id) {
            if let Some(title) = input.title {
                artwork.title = title;
            }
            if let Some(description) = input.description {
                artwork.description = Some(description);
            }
            if let Some(image_url) = input.image_url {
                artwork.image_url = image_url;
            }
            if let Some(tags) = input.tags {
                artwork.tags = tags;
            }
            if let Some(featured) = input.featured {
                artwork.featured = featured;
            }
            if let Some(sort_order) = input.sort_order {
                artwork.sort_order = sort_order;
            }
            artwork.updated_at = Self::now();
            return Ok(Some(artwork.clone()));
        }
        Ok(None)
    }

    pub async fn delete_artwork(&self, id: Uuid) -> Result<bool> {
        Ok(self.artworks.write().remove(&id).is_some())
    }

    pub async fn count_artworks(&self, featured_only: bool) -> Result<i64> {
        let count = self
            .artworks
            .read()
            .values()
            .filter(|a| !featured_only || a.featured)
            .count();
        Ok(count as i64)
    }

    // ============================================
    // Content settings
    // ============================================

    pub async fn list_settings(&self) -> Result<Vec<ContentSettingRow>> {
        Ok(self.settings.read().values().cloned().collect())
    }

    pub async fn get_setting(&self, key: &str) -> Result<Option<ContentSettingRow>> {
        Ok(self.settings.read().get(key).cloned())
    }

    pub async fn upsert_setting(&self, key: &str, value: &str) -> Result<ContentSettingRow> {
        let row = ContentSettingRow {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: Self::now(),
        };
        self.settings.write().insert(key.to_string(), row.clone());
        Ok(row)
    }

    pub async fn delete_setting(&self, key: &str) -> Result<bool> {
        Ok(self.settings.write().remove(key).is_some())
    }

    pub async fn count_settings(&self) -> Result<i64> {
        Ok(self.settings.read().len() as i64)
    }

    // ============================================
    // Size-card templates
    // ============================================

    pub async fn create_size_card(&self, input: CreateSizeCardRow) -> Result<SizeCardRow> {
        let mut cards = self.size_cards.write();
        if cards.values().any(|c| c.name == input.name) {
            return Err(StoreError::conflict("size card", input.name).into());
        }

        let now = Self::now();
        let id = Uuid::now_v7();
        let row = SizeCardRow {
            id,
            name: input.name,
            description: input.description,
            column_labels: Json(input.column_labels),
            row_cells: Json(input.row_cells),
            created_at: now,
            updated_at: now,
        };
        cards.insert(id, row.clone());
        Ok(row)
    }

    pub async fn get_size_card(&self, id: Uuid) -> Result<Option<SizeCardRow>> {
        Ok(self.size_cards.read().get(&id).cloned())
    }

    pub async fn list_size_cards(&self) -> Result<Vec<SizeCardRow>> {
        let mut result: Vec<_> = self.size_cards.read().values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    pub async fn update_size_card(
        &self,
        id: Uuid,
        input: UpdateSizeCard,
    ) -> Result<Option<SizeCardRow>> {
        let mut cards = self.size_cards.write();

        let Some(current) = cards.get(&id) else {
            return Ok(None);
        };

        let columns = input.column_labels.as_ref().unwrap_or(&current.column_labels.0);
        let rows = input.row_cells.as_ref().unwrap_or(&current.row_cells.0);
        ensure_rectangular(columns, rows)?;

        if let Some(name) = &input.name {
            if cards.values().any(|c| c.id != id && &c.name == name) {
                return Err(StoreError::conflict("size card", name.clone()).into());
            }
        }

        let Some(card) = cards.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = input.name {
            card.name = name;
        }
        if let Some(description) = input.description {
            card.description = Some(description);
        }
        if let Some(column_labels) = input.column_labels {
            card.column_labels = Json(column_labels);
        }
        if let Some(row_cells) = input.row_cells {
            card.row_cells = Json(row_cells);
        }
        card.updated_at = Self::now();
        Ok(Some(card.clone()))
    }

    pub async fn delete_size_card(&self, id: Uuid) -> Result<bool> {
        Ok(self.size_cards.write().remove(&id).is_some())
    }

    pub async fn count_size_cards(&self) -> Result<i64> {
        Ok(self.size_cards.read().len() as i64)
    }
}
