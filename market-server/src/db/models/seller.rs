//! Seller Record
//!
//! Identity anchor for orders, menu items, reviews, and reports. Account
//! management lives outside this engine; reports fail fast when the id
//! does not resolve.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    /// Derived average of published reviews (0 when none)
    pub rating: f64,
    /// Derived count of published reviews
    pub reviews: i64,
    pub created_at: i64,
}

impl Seller {
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}
