// Admin overview service
// Catalog counts for the admin landing page

use crate::storage::StorageBackend;
use anyhow::Result;
use std::sync::Arc;

use crate::api::admin::AdminOverview;

pub struct OverviewService {
    db: Arc<StorageBackend>,
}

impl OverviewService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn overview(&self) -> Result<AdminOverview> {
        Ok(AdminOverview {
            artworks: self.db.count_artworks(false).await?,
            featured_artworks: self.db.count_artworks(true).await?,
            settings: self.db.count_settings().await?,
            size_cards: self.db.count_size_cards().await?,
            storage: if self.db.is_dev_mode() {
                "memory".to_string()
            } else {
                "postgres".to_string()
            },
        })
    }
}
