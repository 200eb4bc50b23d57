//! Menu Item API Handlers
//!
//! Minimal persistence surface for the catalog. The derived `rating` /
//! `reviews` cache is not writable here — those fields belong to the
//! rating aggregator.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::ServerState;
use crate::db::models::MenuItem;
use crate::db::repository::{MenuItemRepository, SellerRepository};
use crate::utils::{AppError, AppResult};
use shared::models::{MenuItemCreate, MenuItemStatus, MenuItemUpdate};

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation(format!(
            "price must be a finite non-negative number, got {}",
            price
        )));
    }
    Ok(())
}

fn validate_discount(pct: f64) -> AppResult<()> {
    if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
        return Err(AppError::validation(format!(
            "discountPercent must be between 0 and 100, got {}",
            pct
        )));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub seller: String,
}

/// GET /api/menu-items?seller=…
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    SellerRepository::new(state.db.clone())
        .require(&query.seller)
        .await?;
    let items = MenuItemRepository::new(state.db.clone())
        .find_by_seller(&query.seller)
        .await?;
    Ok(Json(items))
}

/// GET /api/menu-items/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = MenuItemRepository::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /api/menu-items
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_price(payload.price)?;
    if let Some(pct) = payload.discount_percent {
        validate_discount(pct)?;
    }
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("name must not be empty"));
    }

    SellerRepository::new(state.db.clone())
        .require(&payload.seller_id)
        .await?;

    let now = shared::util::now_millis();
    let item = MenuItem {
        id: None,
        seller: payload.seller_id,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        discount_percent: payload.discount_percent,
        status: payload.status.unwrap_or(MenuItemStatus::Available),
        rating: 0.0,
        reviews: 0,
        popularity: 0,
        created_at: now,
        updated_at: now,
    };

    let created = MenuItemRepository::new(state.db.clone()).create(item).await?;
    Ok(Json(created))
}

/// PUT /api/menu-items/{id} — price, status, discount, copy fields only
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let mut data = Map::new();
    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::validation("name must not be empty"));
        }
        data.insert("name".to_string(), Value::from(name));
    }
    if let Some(description) = payload.description {
        data.insert("description".to_string(), Value::from(description));
    }
    if let Some(price) = payload.price {
        validate_price(price)?;
        data.insert("price".to_string(), Value::from(price));
    }
    if let Some(pct) = payload.discount_percent {
        validate_discount(pct)?;
        data.insert("discount_percent".to_string(), Value::from(pct));
    }
    if let Some(status) = payload.status {
        data.insert(
            "status".to_string(),
            serde_json::to_value(status).map_err(|e| AppError::internal(e.to_string()))?,
        );
    }
    if data.is_empty() {
        return Err(AppError::validation("no fields to update"));
    }
    data.insert(
        "updated_at".to_string(),
        Value::from(shared::util::now_millis()),
    );

    let updated = MenuItemRepository::new(state.db.clone())
        .update(&id, Value::Object(data))
        .await?;
    Ok(Json(updated))
}
