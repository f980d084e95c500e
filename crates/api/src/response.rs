//! Typed response bodies shared across handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!` so the wire contract is
//! visible in one place.

use fete_db::models::gift::Gift;
use serde::Serialize;

/// Standard `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body for the gift enabled-flag update: acknowledgement plus the
/// post-update row.
#[derive(Debug, Serialize)]
pub struct GiftUpdated {
    pub message: &'static str,
    pub gift: Gift,
}
