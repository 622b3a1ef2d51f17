// Artwork service

use crate::storage::{
    models::{CreateArtworkRow, UpdateArtwork},
    ArtworkRow, StorageBackend,
};
use anyhow::Result;
use east_store_core::Artwork;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::artworks::{CreateArtworkRequest, UpdateArtworkRequest};

pub struct ArtworkService {
    db: Arc<StorageBackend>,
}

impl ArtworkService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateArtworkRequest) -> Result<Artwork> {
        let input = CreateArtworkRow {
            title: req.title,
            description: req.description,
            image_url: req.image_url,
            tags: req.tags,
            featured: req.featured,
            sort_order: req.sort_order,
        };
        let row = self.db.create_artwork(input).await?;
        tracing::info!(artwork_id = %row.id, title = %row.title, "Artwork created");
        Ok(Self::row_to_artwork(row))
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Artwork>> {
        let row = self.db.get_artwork(id).await?;
        Ok(row.map(Self::row_to_artwork))
    }

    pub async fn list(&self, featured: Option<bool>) -> Result<Vec<Artwork>> {
        let rows = self.db.list_artworks(featured).await?;
        Ok(rows.into_iter().map(Self::row_to_artwork).collect())
    }

    pub async fn update(&self, id: Uuid, req: UpdateArtworkRequest) -> Result<Option<Artwork>> {
        let input = UpdateArtwork {
            title: req.title,
            description: req.description,
            image_url: req.image_url,
            tags: req.tags,
            featured: req.featured,
            sort_order: req.sort_order,
        };
        let row = self.db.update_artwork(id, input).await?;
        Ok(row.map(Self::row_to_artwork))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let deleted = self.db.delete_artwork(id).await?;
        if deleted {
            tracing::info!(artwork_id = %id, "Artwork deleted");
        }
        Ok(deleted)
    }

    fn row_to_artwork(row: ArtworkRow) -> Artwork {
        Artwork {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            tags: row.tags,
            featured: row.featured,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
