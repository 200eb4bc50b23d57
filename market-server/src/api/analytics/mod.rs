//! Analytics API module
//!
//! All report routes are read-only and per-seller. An unresolved seller
//! id fails the whole call with 404 before any bucketing runs.

mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/analytics/{seller_id}", report_routes())
}

fn report_routes() -> Router<ServerState> {
    Router::new()
        .route("/orders/today", get(handler::orders_today))
        .route("/revenue/today", get(handler::revenue_today))
        .route("/rating/today", get(handler::rating_today))
        .route("/overview/monthly", get(handler::monthly_overview))
        .route("/revenue/weekly", get(handler::weekly_revenue))
        .route("/revenue/daily", get(handler::daily_revenue))
        .route("/orders/daily", get(handler::daily_orders))
        .route("/revenue/hourly", get(handler::hourly_revenue))
        .route("/orders/hourly", get(handler::hourly_orders))
        .route("/status-distribution", get(handler::status_distribution))
        .route("/payment-methods", get(handler::payment_methods))
}
