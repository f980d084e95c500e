//! Gift entity model and DTOs.
//!
//! The table stores the price range as flat `price_min` / `price_max`
//! columns and the links list as JSONB; [`Gift`] folds both back into the
//! nested shapes the API exposes, which is why it implements `FromRow` by
//! hand instead of deriving it.

use fete_core::gifts::{GiftLink, PriceRange};
use fete_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{FromRow, Row};

/// A row from the `gifts` table.
#[derive(Debug, Clone, Serialize)]
pub struct Gift {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: PriceRange,
    pub image: Option<String>,
    pub enabled: bool,
    pub code: Option<String>,
    pub links: Vec<GiftLink>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FromRow<'_, PgRow> for Gift {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let links: Json<Vec<GiftLink>> = row.try_get("links")?;
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: PriceRange {
                min: row.try_get("price_min")?,
                max: row.try_get("price_max")?,
            },
            image: row.try_get("image")?,
            enabled: row.try_get("enabled")?,
            code: row.try_get("code")?,
            links: links.0,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// DTO for creating a gift. Every field is optional: absent fields fall back
/// to NULL or the column default, with no validation of range ordering or
/// field presence.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGift {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceRange>,
    pub image: Option<String>,
    pub enabled: Option<bool>,
    pub code: Option<String>,
    pub links: Option<Vec<GiftLink>>,
}

/// DTO for the enabled-flag update. `enabled` is the only field this system
/// mutates after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGiftEnabled {
    pub enabled: bool,
}
