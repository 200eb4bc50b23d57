//! Pricing
//!
//! Pure cart pricing: line items + delivery mode + promo code + tip in,
//! authoritative monetary breakdown out. No persistence — consumed by
//! checkout quoting and by order creation.

pub mod calculator;

pub use calculator::{
    line_total, price_cart, to_decimal, to_f64, CartLine, PricingError, DELIVERY_FEE,
};
