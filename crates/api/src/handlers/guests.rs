//! Handlers for the `/api/guests` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fete_db::models::guest::{ConfirmGuests, CreateGuest, Guest};
use fete_db::repositories::GuestRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/guests
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGuest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    GuestRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Guest added successfully!",
        }),
    ))
}

/// GET /api/guests
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Guest>>> {
    let guests = GuestRepo::list(&state.pool).await?;
    Ok(Json(guests))
}

/// PATCH /api/guests/confirm
///
/// Ids that do not match a guest are skipped silently; the affected-row
/// count is not part of the response contract.
pub async fn confirm(
    State(state): State<AppState>,
    Json(input): Json<ConfirmGuests>,
) -> AppResult<Json<MessageResponse>> {
    GuestRepo::confirm(&state.pool, &input.guest_ids).await?;
    Ok(Json(MessageResponse {
        message: "Attendance confirmed successfully!",
    }))
}
