//! Repository for the `gifts` table.

use fete_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::gift::{CreateGift, Gift};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price_min, price_max, image, enabled, code, links, \
                       created_at, updated_at";

/// Provides CRUD operations for gifts.
pub struct GiftRepo;

impl GiftRepo {
    /// Insert a new gift, returning the created row. Absent optional fields
    /// fall back to the column defaults.
    pub async fn create(pool: &PgPool, input: &CreateGift) -> Result<Gift, sqlx::Error> {
        let query = format!(
            "INSERT INTO gifts (name, description, price_min, price_max, image, enabled, code, links) \
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, 0), $5, COALESCE($6, FALSE), $7, \
                     COALESCE($8, '[]'::jsonb)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price.map(|p| p.min))
            .bind(input.price.map(|p| p.max))
            .bind(&input.image)
            .bind(input.enabled)
            .bind(&input.code)
            .bind(input.links.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// List all gifts in insertion order. Filtering and sorting of the
    /// listing happen in memory, above this layer.
    pub async fn list(pool: &PgPool) -> Result<Vec<Gift>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gifts ORDER BY id");
        sqlx::query_as::<_, Gift>(&query).fetch_all(pool).await
    }

    /// Update only the `enabled` flag, returning the post-update row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_enabled(
        pool: &PgPool,
        id: DbId,
        enabled: bool,
    ) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!(
            "UPDATE gifts SET enabled = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .bind(enabled)
            .fetch_optional(pool)
            .await
    }
}
