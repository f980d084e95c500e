//! Guest entity model and DTOs.

use fete_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `guests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Guest {
    pub id: DbId,
    pub name: String,
    pub lastname: String,
    pub status: String,
    pub family: bool,
    pub confirmed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new guest. `confirmed` is not accepted at creation;
/// it starts false and is only flipped by the batch confirm endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuest {
    pub name: String,
    pub lastname: String,
    pub status: String,
    pub family: bool,
}

/// DTO for the batch confirm endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmGuests {
    #[serde(rename = "guestIds")]
    pub guest_ids: Vec<DbId>,
}
