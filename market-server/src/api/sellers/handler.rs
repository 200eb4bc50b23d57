//! Seller API Handlers
//!
//! Identity records only — account management is an external concern.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::Seller;
use crate::db::repository::SellerRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct SellerCreate {
    pub name: String,
}

/// POST /api/sellers
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SellerCreate>,
) -> AppResult<Json<Seller>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("name must not be empty"));
    }

    let seller = Seller {
        id: None,
        name: payload.name,
        rating: 0.0,
        reviews: 0,
        created_at: shared::util::now_millis(),
    };

    let created = SellerRepository::new(state.db.clone()).create(seller).await?;
    Ok(Json(created))
}

/// GET /api/sellers/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Seller>> {
    let seller = SellerRepository::new(state.db.clone()).require(&id).await?;
    Ok(Json(seller))
}
