//! Order Model
//!
//! Wire shapes for checkout pricing and order lifecycle. The stored
//! order record mirrors these fields; line items snapshot `unit_price`
//! at order time and are never re-joined against the live menu item.

use serde::{Deserialize, Serialize};

/// Fulfillment status. Forward path:
/// pending → confirmed → preparing → ready → in-delivery → delivered.
/// `cancelled` is reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    InDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Terminal states accept no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Position on the canonical forward path. `cancelled` has none.
    pub fn sequence_index(&self) -> Option<u8> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::Confirmed => Some(1),
            OrderStatus::Preparing => Some(2),
            OrderStatus::Ready => Some(3),
            OrderStatus::InDelivery => Some(4),
            OrderStatus::Delivered => Some(5),
            OrderStatus::Cancelled => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::InDelivery => "in-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment status. Independent axis from fulfillment status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Refunded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryType {
    #[default]
    Delivery,
    Pickup,
    DineIn,
}

/// One cart line as submitted by checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    /// Menu item reference (String ID, "menu_item:xxx")
    pub menu_item_id: String,
    pub quantity: i32,
    pub special_instructions: Option<String>,
}

/// Pricing quote request — checkout calls this before committing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPriceRequest {
    pub items: Vec<OrderLineInput>,
    pub delivery_type: DeliveryType,
    pub promo_code: Option<String>,
    pub tip: Option<f64>,
}

/// The authoritative priced breakdown. All fields 2-decimal rounded,
/// each exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub items_discount: f64,
    pub promo_discount: f64,
    pub delivery_fee: f64,
    pub tip: f64,
    pub total: f64,
    /// Echoes the promo code when it resolved and was applied; `None`
    /// means no code was given or the code was invalid (pricing proceeds
    /// without the discount either way).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code_applied: Option<String>,
}

/// Create order payload — same cart shape as the quote, plus identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub client_id: String,
    pub seller_id: String,
    pub items: Vec<OrderLineInput>,
    pub delivery_type: DeliveryType,
    pub promo_code: Option<String>,
    pub tip: Option<f64>,
    pub payment_method: Option<String>,
    pub delivery_address: Option<String>,
    pub scheduled_for: Option<i64>,
}

/// Status update payload — either axis, or both in one call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    /// Staff override: permits forward jumps under the strict policy.
    #[serde(default)]
    pub r#override: bool,
}

/// Refund request. Only valid while `payment_status == paid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub amount: f64,
    pub reason: String,
}

/// Recorded refund details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefundInfo {
    pub amount: f64,
    pub reason: String,
    /// Unix millis
    pub date: i64,
}
