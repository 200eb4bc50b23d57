//! Promo Code Record

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Promo code lookup entry. Consumption flips `available` in the same
/// conditional update that validates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoCode {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Unique, matched case-sensitively
    pub code: String,
    /// Percentage discount (0–100)
    pub discount: f64,
    pub available: bool,
    pub created_at: i64,
}
