//! Review API module

mod handler;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reviews", review_routes())
}

fn review_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}/response", post(handler::respond))
        .route("/{id}/helpful", post(handler::vote_helpful))
        .route("/{id}/status", put(handler::moderate))
}
