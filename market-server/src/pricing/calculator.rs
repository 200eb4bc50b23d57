//! Pricing Calculator
//!
//! Turns a cart into a priced breakdown:
//!
//! 1. subtotal = Σ unit_price × quantity (undiscounted)
//! 2. items_discount = Σ discounted lines' unit_price × quantity × pct/100
//! 3. promo_discount = (subtotal − items_discount) × promo_pct/100
//! 4. delivery_fee = fixed constant for delivery orders
//! 5. total = subtotal − items_discount − promo_discount + delivery_fee + tip
//!
//! All arithmetic runs on `Decimal`; every output field is rounded to
//! 2 decimal places half-up exactly once, never cumulatively.

use rust_decimal::prelude::*;
use shared::models::{DeliveryType, PriceBreakdown};

use crate::db::models::PromoCode;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Flat delivery fee in currency units
pub const DELIVERY_FEE: f64 = 4.99;

/// Maximum allowed unit price per line
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9999;

/// One cart line, already resolved against the menu item catalog: the
/// unit price is the captured snapshot and `discount_percent` is the
/// item's active percentage discount, if any.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub menu_item: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub discount_percent: Option<f64>,
    pub special_instructions: Option<String>,
}

/// Pricing validation failures. Nothing is written when these occur.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PricingError {
    #[error("cart must contain at least one item")]
    EmptyCart,

    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),

    #[error("unit price must be a finite non-negative number, got {0}")]
    InvalidUnitPrice(f64),

    #[error("item discount percent must be between 0 and 100, got {0}")]
    InvalidDiscount(f64),

    #[error("tip must be a finite non-negative number, got {0}")]
    InvalidTip(f64),
}

impl From<PricingError> for crate::utils::AppError {
    fn from(err: PricingError) -> Self {
        crate::utils::AppError::validation(err.to_string())
    }
}

// ==================== Conversion Helpers ====================

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total = quantity × unit price, rounded to 2 decimal places.
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

// ==================== Validation ====================

fn validate_line(line: &CartLine) -> Result<(), PricingError> {
    if !line.unit_price.is_finite() || line.unit_price < 0.0 || line.unit_price > MAX_PRICE {
        return Err(PricingError::InvalidUnitPrice(line.unit_price));
    }
    if line.quantity < 1 || line.quantity > MAX_QUANTITY {
        return Err(PricingError::InvalidQuantity(line.quantity));
    }
    if let Some(pct) = line.discount_percent {
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(PricingError::InvalidDiscount(pct));
        }
    }
    Ok(())
}

// ==================== Main Calculator ====================

/// Price a cart.
///
/// `promo` is the already-resolved lookup result: `None` when no code was
/// given or the code did not resolve to an available record. An invalid
/// code never aborts pricing — it degrades to "no discount applied" and
/// the breakdown's `promo_code_applied` stays `None`.
pub fn price_cart(
    lines: &[CartLine],
    delivery_type: DeliveryType,
    promo: Option<&PromoCode>,
    tip: Option<f64>,
) -> Result<PriceBreakdown, PricingError> {
    if lines.is_empty() {
        return Err(PricingError::EmptyCart);
    }
    for line in lines {
        validate_line(line)?;
    }

    let tip_value = tip.unwrap_or(0.0);
    if !tip_value.is_finite() || tip_value < 0.0 {
        return Err(PricingError::InvalidTip(tip_value));
    }

    let hundred = Decimal::ONE_HUNDRED;

    // Step 1: undiscounted subtotal
    let mut subtotal = Decimal::ZERO;
    // Step 2: item-level percentage discounts
    let mut items_discount = Decimal::ZERO;

    for line in lines {
        let line_amount = to_decimal(line.unit_price) * Decimal::from(line.quantity);
        subtotal += line_amount;

        if let Some(pct) = line.discount_percent.filter(|p| *p > 0.0) {
            items_discount += line_amount * to_decimal(pct) / hundred;
        }
    }

    // Step 3: promo applies to the post-item-discount amount
    let after_item_discounts = subtotal - items_discount;
    let promo_discount = match promo {
        Some(code) => after_item_discounts * to_decimal(code.discount) / hundred,
        None => Decimal::ZERO,
    };

    // Step 4: flat fee for delivery orders only
    let delivery_fee = if delivery_type == DeliveryType::Delivery {
        to_decimal(DELIVERY_FEE)
    } else {
        Decimal::ZERO
    };

    let tip_dec = to_decimal(tip_value);

    // Step 5: total from exact intermediates, clamped non-negative
    let total = (after_item_discounts - promo_discount + delivery_fee + tip_dec)
        .max(Decimal::ZERO);

    Ok(PriceBreakdown {
        subtotal: to_f64(subtotal),
        items_discount: to_f64(items_discount),
        promo_discount: to_f64(promo_discount),
        delivery_fee: to_f64(delivery_fee),
        tip: to_f64(tip_dec),
        total: to_f64(total),
        promo_code_applied: promo.map(|p| p.code.clone()),
    })
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line(unit_price: f64, quantity: i32, discount: Option<f64>) -> CartLine {
        CartLine {
            menu_item: "menu_item:test".to_string(),
            name: "Test Item".to_string(),
            quantity,
            unit_price,
            discount_percent: discount,
            special_instructions: None,
        }
    }

    fn make_promo(code: &str, discount: f64) -> PromoCode {
        PromoCode {
            id: None,
            code: code.to_string(),
            discount,
            available: true,
            created_at: 0,
        }
    }

    // ==================== Basic Tests ====================

    #[test]
    fn test_plain_cart_no_discounts() {
        // 2 × 10.00 + 1 × 5.50 = 25.50, pickup, no tip
        let lines = vec![make_line(10.0, 2, None), make_line(5.5, 1, None)];
        let result = price_cart(&lines, DeliveryType::Pickup, None, None).unwrap();

        assert_eq!(result.subtotal, 25.5);
        assert_eq!(result.items_discount, 0.0);
        assert_eq!(result.promo_discount, 0.0);
        assert_eq!(result.delivery_fee, 0.0);
        assert_eq!(result.tip, 0.0);
        assert_eq!(result.total, 25.5);
        assert!(result.promo_code_applied.is_none());
    }

    #[test]
    fn test_full_breakdown_scenario() {
        // subtotal 20.00 with one 50%-discounted line worth 10.00:
        //   items_discount = 5.00, after = 15.00
        //   promo 10% on 15.00 = 1.50
        //   delivery fee 4.99, tip 2.00
        //   total = 15.00 - 1.50 + 4.99 + 2.00 = 20.49
        let lines = vec![
            make_line(10.0, 1, Some(50.0)),
            make_line(10.0, 1, None),
        ];
        let promo = make_promo("WELCOME10", 10.0);
        let result =
            price_cart(&lines, DeliveryType::Delivery, Some(&promo), Some(2.0)).unwrap();

        assert_eq!(result.subtotal, 20.0);
        assert_eq!(result.items_discount, 5.0);
        assert_eq!(result.promo_discount, 1.5);
        assert_eq!(result.delivery_fee, 4.99);
        assert_eq!(result.tip, 2.0);
        assert_eq!(result.total, 20.49);
        assert_eq!(result.promo_code_applied.as_deref(), Some("WELCOME10"));
    }

    #[test]
    fn test_delivery_fee_only_for_delivery() {
        let lines = vec![make_line(10.0, 1, None)];

        let delivery = price_cart(&lines, DeliveryType::Delivery, None, None).unwrap();
        assert_eq!(delivery.delivery_fee, 4.99);
        assert_eq!(delivery.total, 14.99);

        let pickup = price_cart(&lines, DeliveryType::Pickup, None, None).unwrap();
        assert_eq!(pickup.delivery_fee, 0.0);

        let dine_in = price_cart(&lines, DeliveryType::DineIn, None, None).unwrap();
        assert_eq!(dine_in.delivery_fee, 0.0);
    }

    #[test]
    fn test_promo_applies_after_item_discounts() {
        // 100.00 with 20% item discount -> 80.00
        // 25% promo on 80.00 = 20.00, not 25.00
        let lines = vec![make_line(100.0, 1, Some(20.0))];
        let promo = make_promo("QUARTER", 25.0);
        let result = price_cart(&lines, DeliveryType::Pickup, Some(&promo), None).unwrap();

        assert_eq!(result.items_discount, 20.0);
        assert_eq!(result.promo_discount, 20.0);
        assert_eq!(result.total, 60.0);
    }

    #[test]
    fn test_determinism() {
        let lines = vec![make_line(13.37, 3, Some(15.0))];
        let promo = make_promo("TEN", 10.0);
        let a = price_cart(&lines, DeliveryType::Delivery, Some(&promo), Some(1.5)).unwrap();
        let b = price_cart(&lines, DeliveryType::Delivery, Some(&promo), Some(1.5)).unwrap();
        assert_eq!(a, b);
    }

    // ==================== Rounding Tests ====================

    #[test]
    fn test_rounding_half_up_per_field() {
        // 3 × 3.33 = 9.99; 33% discount = 3.2967 -> rounds to 3.30
        let lines = vec![make_line(3.33, 3, Some(33.0))];
        let result = price_cart(&lines, DeliveryType::Pickup, None, None).unwrap();

        assert_eq!(result.subtotal, 9.99);
        assert_eq!(result.items_discount, 3.3);
        // total from exact intermediates: 9.99 - 3.2967 = 6.6933 -> 6.69
        assert_eq!(result.total, 6.69);
    }

    #[test]
    fn test_rounding_midpoint_goes_up() {
        // 1 × 10.01 with 50% discount: 5.005 -> 5.01 (half-up)
        let lines = vec![make_line(10.01, 1, Some(50.0))];
        let result = price_cart(&lines, DeliveryType::Pickup, None, None).unwrap();
        assert_eq!(result.items_discount, 5.01);
    }

    // ==================== Edge Cases ====================

    #[test]
    fn test_empty_cart_rejected() {
        let result = price_cart(&[], DeliveryType::Pickup, None, None);
        assert_eq!(result.unwrap_err(), PricingError::EmptyCart);
    }

    #[test]
    fn test_quantity_below_one_rejected() {
        let lines = vec![make_line(10.0, 0, None)];
        assert!(matches!(
            price_cart(&lines, DeliveryType::Pickup, None, None),
            Err(PricingError::InvalidQuantity(0))
        ));

        let lines = vec![make_line(10.0, -2, None)];
        assert!(matches!(
            price_cart(&lines, DeliveryType::Pickup, None, None),
            Err(PricingError::InvalidQuantity(-2))
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let lines = vec![make_line(-1.0, 1, None)];
        assert!(matches!(
            price_cart(&lines, DeliveryType::Pickup, None, None),
            Err(PricingError::InvalidUnitPrice(_))
        ));
    }

    #[test]
    fn test_nan_price_rejected() {
        let lines = vec![make_line(f64::NAN, 1, None)];
        assert!(matches!(
            price_cart(&lines, DeliveryType::Pickup, None, None),
            Err(PricingError::InvalidUnitPrice(_))
        ));
    }

    #[test]
    fn test_discount_over_100_rejected() {
        let lines = vec![make_line(10.0, 1, Some(150.0))];
        assert!(matches!(
            price_cart(&lines, DeliveryType::Pickup, None, None),
            Err(PricingError::InvalidDiscount(_))
        ));
    }

    #[test]
    fn test_negative_tip_rejected() {
        let lines = vec![make_line(10.0, 1, None)];
        assert!(matches!(
            price_cart(&lines, DeliveryType::Pickup, None, Some(-0.5)),
            Err(PricingError::InvalidTip(_))
        ));
    }

    #[test]
    fn test_zero_discount_is_inactive() {
        let lines = vec![make_line(10.0, 2, Some(0.0))];
        let result = price_cart(&lines, DeliveryType::Pickup, None, None).unwrap();
        assert_eq!(result.items_discount, 0.0);
        assert_eq!(result.total, 20.0);
    }

    #[test]
    fn test_hundred_percent_promo_floors_at_zero() {
        let lines = vec![make_line(10.0, 1, None)];
        let promo = make_promo("FREE", 100.0);
        let result = price_cart(&lines, DeliveryType::Pickup, Some(&promo), None).unwrap();
        assert_eq!(result.promo_discount, 10.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_line_total_snapshot_price() {
        assert_eq!(line_total(10.99, 3), 32.97);
        assert_eq!(line_total(0.01, 100), 1.0);
    }
}
