//! Promo Code API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::PromoCode;
use crate::db::repository::PromoCodeRepository;
use crate::utils::{AppError, AppResult};
use shared::models::PromoCodeCreate;

/// POST /api/promo-codes
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PromoCodeCreate>,
) -> AppResult<Json<PromoCode>> {
    if payload.code.trim().is_empty() {
        return Err(AppError::validation("code must not be empty"));
    }
    if !payload.discount.is_finite() || !(0.0..=100.0).contains(&payload.discount) {
        return Err(AppError::validation(format!(
            "discount must be between 0 and 100, got {}",
            payload.discount
        )));
    }

    let code = PromoCode {
        id: None,
        code: payload.code,
        discount: payload.discount,
        available: true,
        created_at: shared::util::now_millis(),
    };

    let created = PromoCodeRepository::new(state.db.clone()).create(code).await?;
    Ok(Json(created))
}

/// GET /api/promo-codes/{code}
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<PromoCode>> {
    let found = PromoCodeRepository::new(state.db.clone())
        .find_by_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Promo code {} not found", code)))?;
    Ok(Json(found))
}
