//! Promo Code Model

use serde::{Deserialize, Serialize};

/// Create payload for the promo lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeCreate {
    pub code: String,
    /// Percentage discount (0–100) applied after item-level discounts.
    pub discount: f64,
}
