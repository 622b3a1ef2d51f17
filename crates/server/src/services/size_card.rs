// Size-card template service

use crate::storage::{
    models::{CreateSizeCardRow, UpdateSizeCard},
    SizeCardRow, StorageBackend,
};
use anyhow::Result;
use east_store_core::SizeCardTemplate;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::size_cards::{CreateSizeCardRequest, UpdateSizeCardRequest};

pub struct SizeCardService {
    db: Arc<StorageBackend>,
}

impl SizeCardService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateSizeCardRequest) -> Result<SizeCardTemplate> {
        let input = CreateSizeCardRow {
            name: req.name,
            description: req.description,
            column_labels: req.columns,
            row_cells: req.rows,
        };
        let row = self.db.create_size_card(input).await?;
        tracing::info!(size_card_id = %row.id, name = %row.name, "Size card created");
        Ok(Self::row_to_template(row))
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<SizeCardTemplate>> {
        let row = self.db.get_size_card(id).await?;
        Ok(row.map(Self::row_to_template))
    }

    pub async fn list(&self) -> Result<Vec<SizeCardTemplate>> {
        let rows = self.db.list_size_cards().await?;
        Ok(rows.into_iter().map(Self::row_to_template).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: UpdateSizeCardRequest,
    ) -> Result<Option<SizeCardTemplate>> {
        let input = UpdateSizeCard {
            name: req.name,
            description: req.description,
            column_labels: req.columns,
            row_cells: req.rows,
        };
        let row = self.db.update_size_card(id, input).await?;
        Ok(row.map(Self::row_to_template))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        self.db.delete_size_card(id).await
    }

    fn row_to_template(row: SizeCardRow) -> SizeCardTemplate {
        SizeCardTemplate {
            id: row.id,
            name: row.name,
            description: row.description,
            columns: row.column_labels.0,
            rows: row.row_cells.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
