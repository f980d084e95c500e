//! Route definitions for guests.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::guests;
use crate::state::AppState;

/// Routes mounted at `/guests`.
///
/// ```text
/// GET   /          -> list
/// POST  /          -> create
/// PATCH /confirm   -> confirm (batch)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(guests::list).post(guests::create))
        .route("/confirm", patch(guests::confirm))
}
