//! Review Model

use serde::{Deserialize, Serialize};

/// Moderation status. Only `published` reviews count toward aggregates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Published,
    Flagged,
    Rejected,
}

/// Create payload. One submission per review; after creation only the
/// response, helpful count, and moderation status may change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    pub seller_id: String,
    pub client_id: String,
    pub menu_item_id: Option<String>,
    pub order_ref: Option<String>,
    /// Integer stars in [1, 5].
    pub rating: i32,
    pub comment: String,
}

/// Seller response attached to a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub responder: String,
    pub text: String,
    /// Unix millis
    pub date: i64,
}

/// Payload for posting a seller response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponseInput {
    pub responder: String,
    pub text: String,
}

/// Helpful vote: +1 or -1. The stored count never drops below zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpfulVote {
    pub delta: i32,
}

/// Moderation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewStatusUpdate {
    pub status: ReviewStatus,
}
