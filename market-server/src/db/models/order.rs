//! Order Record
//!
//! Persisted order. Line items carry the unit price captured at order
//! time — a historical snapshot, never a live join against the menu item.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::{DeliveryType, OrderStatus, PaymentStatus, RefundInfo};
use surrealdb::RecordId;

/// One persisted order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item reference (String ID, "menu_item:xxx")
    pub menu_item: String,
    pub name: String,
    pub quantity: i32,
    /// Unit price in currency units, captured at order time
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl OrderItem {
    /// Line total = quantity × captured unit price.
    pub fn line_total(&self) -> f64 {
        crate::pricing::line_total(self.unit_price, self.quantity)
    }
}

/// Order entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Buyer reference (String ID, "client:xxx" — opaque to this engine)
    pub client: String,
    /// Merchant reference (String ID, "seller:xxx")
    pub seller: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// The single authoritative charge, computed once at creation
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<f64>,
    /// Item-level + promo discounts combined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code_applied: Option<String>,
    pub delivery_type: DeliveryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery_time: Option<i64>,
    /// Driver reference, assigned by dispatch (external)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_info: Option<RefundInfo>,
    /// Unix millis, immutable
    pub created_at: i64,
    /// Unix millis, bumped on every mutation
    pub updated_at: i64,
}

impl Order {
    /// Record id in "table:id" string form. Empty before persistence.
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}
