//! API route modules
//!
//! # Structure
//!
//! - [`health`] — liveness check
//! - [`checkout`] — pricing quotes
//! - [`orders`] — order creation, lifecycle, refunds
//! - [`reviews`] — reviews, responses, helpful votes, moderation
//! - [`menu_items`] — catalog persistence surface
//! - [`sellers`] — seller identity records
//! - [`promo_codes`] — promo lookup table
//! - [`analytics`] — seller dashboard reports

pub mod analytics;
pub mod checkout;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod promo_codes;
pub mod reviews;
pub mod sellers;

use axum::Router;

use crate::core::ServerState;

/// Full application router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(checkout::router())
        .merge(orders::router())
        .merge(reviews::router())
        .merge(menu_items::router())
        .merge(sellers::router())
        .merge(promo_codes::router())
        .merge(analytics::router())
}
