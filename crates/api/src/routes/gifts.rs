//! Route definitions for gifts.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::gifts;
use crate::state::AppState;

/// Routes mounted at `/gifts`.
///
/// ```text
/// GET  /       -> list (filter/sort via query params)
/// POST /       -> create
/// PUT  /{id}   -> set enabled flag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gifts::list).post(gifts::create))
        .route("/{id}", put(gifts::set_enabled))
}
