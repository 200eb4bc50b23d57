//! Review Record

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::{ReviewResponse, ReviewStatus};
use surrealdb::RecordId;

/// Review entity. Created once; afterwards only `response`,
/// `helpful_count`, and `status` mutate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Merchant reference (String ID, "seller:xxx")
    pub seller: String,
    /// Buyer reference
    pub client: String,
    /// Optional menu item reference when the review targets a dish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_ref: Option<String>,
    /// Integer stars in [1, 5]
    pub rating: i32,
    pub comment: String,
    pub status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ReviewResponse>,
    /// Floored at 0 on decrement
    pub helpful_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Review {
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}
