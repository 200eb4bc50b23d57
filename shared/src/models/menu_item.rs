//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item availability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MenuItemStatus {
    #[default]
    Available,
    OutOfStock,
    Hidden,
}

/// Create payload. `rating` and `reviews` are derived fields owned by the
/// rating aggregator and are deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub seller_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Active percentage discount (0–100) when set and > 0.
    pub discount_percent: Option<f64>,
    pub status: Option<MenuItemStatus>,
}

/// Update payload. Aggregate fields cannot be written through this path.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub discount_percent: Option<f64>,
    pub status: Option<MenuItemStatus>,
}
