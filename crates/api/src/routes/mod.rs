pub mod gifts;
pub mod guests;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /guests            list (GET), create (POST)
/// /guests/confirm    batch attendance confirm (PATCH)
///
/// /gifts             list with filter/sort (GET), create (POST)
/// /gifts/{id}        set enabled flag (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/guests", guests::router())
        .nest("/gifts", gifts::router())
}
