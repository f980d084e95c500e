//! Repository for the `guests` table.

use fete_core::types::DbId;
use sqlx::PgPool;

use crate::models::guest::{CreateGuest, Guest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, lastname, status, family, confirmed, created_at, updated_at";

/// Provides CRUD operations for guests.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest, returning the created row. `confirmed` starts
    /// false via the column default.
    pub async fn create(pool: &PgPool, input: &CreateGuest) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests (name, lastname, status, family) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(&input.name)
            .bind(&input.lastname)
            .bind(&input.status)
            .bind(input.family)
            .fetch_one(pool)
            .await
    }

    /// List all guests in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests ORDER BY id");
        sqlx::query_as::<_, Guest>(&query).fetch_all(pool).await
    }

    /// Set `confirmed = true` on every guest whose id appears in `ids`.
    ///
    /// Ids with no matching row are skipped; the returned count is the
    /// number of rows actually updated.
    pub async fn confirm(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE guests SET confirmed = TRUE, updated_at = now() WHERE id = ANY($1)",
        )
        .bind(ids)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
