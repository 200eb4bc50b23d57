//! Promo Code API module

mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/promo-codes", promo_code_routes())
}

fn promo_code_routes() -> Router<ServerState> {
    Router::new()
        .route("/", axum::routing::post(handler::create))
        .route("/{code}", get(handler::get_by_code))
}
