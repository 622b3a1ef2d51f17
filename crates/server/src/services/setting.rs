// Content setting service

use crate::storage::{ContentSettingRow, StorageBackend};
use anyhow::Result;
use east_store_core::ContentSetting;
use std::sync::Arc;

pub struct SettingService {
    db: Arc<StorageBackend>,
}

impl SettingService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ContentSetting>> {
        let rows = self.db.list_settings().await?;
        Ok(rows.into_iter().map(Self::row_to_setting).collect())
    }

    pub async fn get(&self, key: &str) -> Result<Option<ContentSetting>> {
        let row = self.db.get_setting(key).await?;
        Ok(row.map(Self::row_to_setting))
    }

    pub async fn put(&self, key: &str, value: &str) -> Result<ContentSetting> {
        let row = self.db.upsert_setting(key, value).await?;
        tracing::info!(key = %row.key, "Content setting saved");
        Ok(Self::row_to_setting(row))
    }

    pub async fn delete(&self, key: &str) -> Result<bool> {
        self.db.delete_setting(key).await
    }

    fn row_to_setting(row: ContentSettingRow) -> ContentSetting {
        ContentSetting {
            key: row.key,
            value: row.value,
            updated_at: row.updated_at,
        }
    }
}
