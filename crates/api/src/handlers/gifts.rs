//! Handlers for the `/api/gifts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fete_core::error::CoreError;
use fete_core::gifts::{sort_by_price_min, PriceBounds, SortDirective};
use fete_core::types::DbId;
use fete_db::models::gift::{CreateGift, Gift, UpdateGiftEnabled};
use fete_db::repositories::GiftRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{GiftUpdated, MessageResponse};
use crate::state::AppState;

/// Query parameters for the gift listing.
///
/// The bounds arrive as raw text; `fete_core::gifts` decides what counts as
/// a usable bound, so unparsable text behaves exactly like an absent
/// parameter.
#[derive(Debug, Deserialize)]
pub struct GiftListParams {
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub sort: Option<String>,
}

/// POST /api/gifts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGift>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    GiftRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Gift added successfully!",
        }),
    ))
}

/// GET /api/gifts?minPrice=&maxPrice=&sort=
///
/// Fetches the collection in natural order, then filters and sorts in
/// memory. Filtering only applies when both bounds are usable; sorting only
/// for the `asc` / `desc` directives.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GiftListParams>,
) -> AppResult<Json<Vec<Gift>>> {
    let mut gifts = GiftRepo::list(&state.pool).await?;

    if let Some(bounds) =
        PriceBounds::from_raw(params.min_price.as_deref(), params.max_price.as_deref())
    {
        gifts.retain(|gift| bounds.contains(&gift.price));
    }

    if let Some(directive) = SortDirective::from_raw(params.sort.as_deref()) {
        sort_by_price_min(&mut gifts, directive, |gift| gift.price.min);
    }

    Ok(Json(gifts))
}

/// PUT /api/gifts/{id}
///
/// Updates only the `enabled` flag; 404 when the id resolves to nothing.
pub async fn set_enabled(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGiftEnabled>,
) -> AppResult<Json<GiftUpdated>> {
    let gift = GiftRepo::set_enabled(&state.pool, id, input.enabled)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gift", id }))?;

    Ok(Json(GiftUpdated {
        message: "Gift confirmed and locked",
        gift,
    }))
}
