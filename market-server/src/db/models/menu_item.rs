//! Menu Item Record

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::MenuItemStatus;
use surrealdb::RecordId;

/// Menu item entity. `rating` and `reviews` are a derived cache owned by
/// the rating aggregator; nothing else writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Merchant reference (String ID, "seller:xxx")
    pub seller: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current list price — mutable, distinct from historical order lines
    pub price: f64,
    /// Active percentage discount (0–100) when set and > 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    pub status: MenuItemStatus,
    /// Derived average of published reviews (0 when none)
    pub rating: f64,
    /// Derived count of published reviews
    pub reviews: i64,
    /// Externally maintained order counter
    pub popularity: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl MenuItem {
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }

    /// Item-level discount percentage currently in effect, if any.
    pub fn active_discount_percent(&self) -> Option<f64> {
        self.discount_percent.filter(|p| *p > 0.0)
    }
}
