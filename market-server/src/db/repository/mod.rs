//! Repository Module
//!
//! One repository per SurrealDB table. Repositories only see `i64` Unix
//! millis for time bounds; date math happens in the caller.

pub mod menu_item;
pub mod order;
pub mod promo_code;
pub mod review;
pub mod seller;

// Re-exports
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use promo_code::PromoCodeRepository;
pub use review::ReviewRepository;
pub use seller::SellerRepository;

use std::future::Future;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings end to end
// =============================================================================
//
// All IDs travel as "table:id" strings and parse into surrealdb::RecordId
// at the repository boundary:
//   - parse:  let id: RecordId = "order:abc".parse()?;
//   - CRUD:   db.select(id) / db.delete(id) take RecordId directly

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Retry a read operation on transient database errors (up to 2 extra
/// attempts). Writes stay single-shot: each mutation is one document
/// update, so a failed write leaves no partial state to repair.
pub async fn retry_read<T, F, Fut>(mut op: F) -> RepoResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RepoResult<T>>,
{
    let mut attempt = 0u32;
    loop {
        match op().await {
            Err(RepoError::Database(msg)) if attempt < 2 => {
                attempt += 1;
                tracing::warn!(attempt, error = %msg, "transient database error, retrying read");
            }
            other => return other,
        }
    }
}
