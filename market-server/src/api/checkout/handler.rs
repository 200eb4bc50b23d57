//! Checkout API Handlers

use axum::{extract::State, Json};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{CheckoutPriceRequest, PriceBreakdown};

/// POST /api/checkout/price — price a cart without committing it.
/// An unknown or exhausted promo code is not an error; the quote comes
/// back without the discount and without `promoCodeApplied`.
pub async fn price(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutPriceRequest>,
) -> AppResult<Json<PriceBreakdown>> {
    let breakdown = state.orders.quote(payload).await?;
    Ok(Json(breakdown))
}
