//! Persistence record types
//!
//! One module per table. Ids are SurrealDB `RecordId`s serialized in the
//! "table:id" string convention (see [`serde_helpers`]).

pub mod menu_item;
pub mod order;
pub mod promo_code;
pub mod review;
pub mod seller;
pub mod serde_helpers;

pub use menu_item::MenuItem;
pub use order::{Order, OrderItem};
pub use promo_code::PromoCode;
pub use review::Review;
pub use seller::Seller;
