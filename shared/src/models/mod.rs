//! Data models
//!
//! Shared between market-server and API clients. These are wire shapes:
//! all money is `f64` rounded to 2 decimal places by the pricing layer,
//! all timestamps are Unix milliseconds.

pub mod menu_item;
pub mod order;
pub mod promo_code;
pub mod report;
pub mod review;

// Re-exports
pub use menu_item::*;
pub use order::*;
pub use promo_code::*;
pub use report::*;
pub use review::*;
