// Repository layer for database operations
// Decision: Tables are created outside this repository; queries assume
// artworks, content_settings and size_cards exist

use anyhow::Result;
use east_store_core::{size_card::ensure_rectangular, StoreError};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::storage::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

/// Map a unique-constraint violation to a typed conflict
fn map_unique_violation(err: sqlx::Error, entity: &'static str, value: &str) -> anyhow::Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::conflict(entity, value).into()
        }
        _ => err.into(),
    }
}

impl Database {
    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    // ============================================
    // Artworks
    // ============================================

    pub async fn create_artwork(&self, input: CreateArtworkRow) -> Result<ArtworkRow> {
        let row = sqlx::query_as::<_, ArtworkRow>(
            r#"
            INSERT INTO artworks (id, title, description, image_url, tags, featured, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, image_url, tags, featured, sort_order, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(&input.tags)
        .bind(input.featured)
        .bind(input.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_artwork(&self, id: Uuid) -> Result<Option<ArtworkRow>> {
        let row = sqlx::query_as::<_, ArtworkRow>(
            r#"
            SELECT id, title, description, image_url, tags, featured, sort_order, created_at, updated_at
            FROM artworks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_artworks(&self, featured: Option<bool>) -> Result<Vec<ArtworkRow>> {
        let rows = sqlx::query_as::<_, ArtworkRow>(
            r#"
            SELECT id, title, description, image_url, tags, featured, sort_order, created_at, updated_at
            FROM artworks
            WHERE ($1::BOOLEAN IS NULL OR featured = $1)
            ORDER BY sort_order ASC, created_at DESC
            "#,
        )
        .bind(featured)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update_artwork(&self, id: Uuid, input: UpdateArtwork) -> Result<Option<ArtworkRow>> {
        let row = sqlx::query_as::<_, ArtworkRow>(
            r#"
            UPDATE artworks
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                tags = COALESCE($5, tags),
                featured = COALESCE($6, featured),
                sort_order = COALESCE($7, sort_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, image_url, tags, featured, sort_order, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(&input.tags)
        .bind(input.featured)
        .bind(input.sort_order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_artwork(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_artworks(&self, featured_only: bool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM artworks WHERE ($1 = FALSE OR featured = TRUE)",
        )
        .bind(featured_only)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    // ============================================
    // Content settings
    // ============================================

    pub async fn list_settings(&self) -> Result<Vec<ContentSettingRow>> {
        let rows = sqlx::query_as::<_, ContentSettingRow>(
            "SELECT key, value, updated_at FROM content_settings ORDER BY key ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_setting(&self, key: &str) -> Result<Option<ContentSettingRow>> {
        let row = sqlx::query_as::<_, ContentSettingRow>(
            "SELECT key, value, updated_at FROM content_settings WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn upsert_setting(&self, key: &str, value: &str) -> Result<ContentSettingRow> {
        let row = sqlx::query_as::<_, ContentSettingRow>(
            r#"
            INSERT INTO content_settings (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = NOW()
            RETURNING key, value, updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_setting(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM content_settings WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_settings(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM content_settings")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // ============================================
    // Size-card templates
    // ============================================

    pub async fn create_size_card(&self, input: CreateSizeCardRow) -> Result<SizeCardRow> {
        sqlx::query_as::<_, SizeCardRow>(
            r#"
            INSERT INTO size_cards (id, name, description, column_labels, row_cells)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, column_labels, row_cells, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.name)
        .bind(&input.description)
        .bind(Json(&input.column_labels))
        .bind(Json(&input.row_cells))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "size card", &input.name))
    }

    pub async fn get_size_card(&self, id: Uuid) -> Result<Option<SizeCardRow>> {
        let row = sqlx::query_as::<_, SizeCardRow>(
            r#"
            SELECT id, name, description, column_labels, row_cells, created_at, updated_at
            FROM size_cards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_size_cards(&self) -> Result<Vec<SizeCardRow>> {
        let rows = sqlx::query_as::<_, SizeCardRow>(
            r#"
            SELECT id, name, description, column_labels, row_cells, created_at, updated_at
            FROM size_cards
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Merge a partial update into the locked row and write it back
    ///
    /// The row stays locked between reading the current table and the
    /// UPDATE, so concurrent column and row edits cannot interleave.
    pub async fn update_size_card(
        &self,
        id: Uuid,
        input: UpdateSizeCard,
    ) -> Result<Option<SizeCardRow>> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, SizeCardRow>(
            r#"
            SELECT id, name, description, column_labels, row_cells, created_at, updated_at
            FROM size_cards
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            return Ok(None);
        };

        let columns = input.column_labels.unwrap_or(current.column_labels.0);
        let rows = input.row_cells.unwrap_or(current.row_cells.0);
        ensure_rectangular(&columns, &rows)?;

        let name = input.name.unwrap_or(current.name);
        let row = sqlx::query_as::<_, SizeCardRow>(
            r#"
            UPDATE size_cards
            SET
                name = $2,
                description = COALESCE($3, description),
                column_labels = $4,
                row_cells = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, column_labels, row_cells, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&name)
        .bind(&input.description)
        .bind(Json(&columns))
        .bind(Json(&rows))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, "size card", &name))?;

        tx.commit().await?;
        Ok(Some(row))
    }

    pub async fn delete_size_card(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM size_cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_size_cards(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM size_cards")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
