//! Shared types for the marketplace engine
//!
//! Wire DTOs, status enums, and report payload shapes used by
//! market-server and its API consumers. Persistence record types live in
//! `market-server/src/db/models` — this crate stays database-free.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
