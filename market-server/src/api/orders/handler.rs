//! Order API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult};
use shared::models::{OrderCreate, OrderStatusUpdate, RefundRequest};

/// Query params for listing orders — exactly one of seller/client.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub seller: Option<String>,
    pub client: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// GET /api/orders — list by seller or client (paginated)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = match (&query.seller, &query.client) {
        (Some(seller), None) => repo.find_by_seller(seller, query.limit, query.offset).await?,
        (None, Some(client)) => repo.find_by_client(client, query.limit, query.offset).await?,
        _ => {
            return Err(AppError::validation(
                "exactly one of seller or client must be given",
            ));
        }
    };
    Ok(Json(orders))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order))
}

/// POST /api/orders — create an order through the pricing calculator
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = state.orders.create_order(payload).await?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/status — fulfillment and/or payment transition
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.orders.update_status(&id, payload).await?;
    Ok(Json(order))
}

/// POST /api/orders/{id}/refund — explicit refund record
pub async fn refund(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RefundRequest>,
) -> AppResult<Json<Order>> {
    let order = state.orders.refund(&id, payload).await?;
    Ok(Json(order))
}
