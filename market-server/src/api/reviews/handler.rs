//! Review API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::Review;
use crate::utils::AppResult;
use shared::models::{HelpfulVote, ReviewCreate, ReviewResponseInput, ReviewStatusUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub seller: String,
}

/// GET /api/reviews?seller=… — published reviews for a seller
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.reviews.list_published(&query.seller).await?;
    Ok(Json(reviews))
}

/// POST /api/reviews — create a review; aggregates recompute afterwards
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<Json<Review>> {
    let review = state.reviews.create_review(payload).await?;
    Ok(Json(review))
}

/// POST /api/reviews/{id}/response — attach the seller's response
pub async fn respond(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReviewResponseInput>,
) -> AppResult<Json<Review>> {
    let review = state.reviews.respond(&id, payload).await?;
    Ok(Json(review))
}

/// POST /api/reviews/{id}/helpful — ±1 vote, floored at 0
pub async fn vote_helpful(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<HelpfulVote>,
) -> AppResult<Json<Review>> {
    let review = state.reviews.vote_helpful(&id, payload).await?;
    Ok(Json(review))
}

/// PUT /api/reviews/{id}/status — moderation
pub async fn moderate(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReviewStatusUpdate>,
) -> AppResult<Json<Review>> {
    let review = state.reviews.moderate(&id, payload).await?;
    Ok(Json(review))
}
