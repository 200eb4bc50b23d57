//! Reviews
//!
//! Review submission and moderation ([`service`]) and the rating
//! aggregator ([`rating`]) that owns the derived average-rating /
//! review-count cache on sellers and menu items.

pub mod rating;
pub mod service;

pub use rating::RatingAggregator;
pub use service::ReviewService;
