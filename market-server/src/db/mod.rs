//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine; in-memory engine for tests).

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::engine::local::{Db, Mem, RocksDb};
use surrealdb::Surreal;

const NAMESPACE: &str = "market";
const DATABASE: &str = "market";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::initialize(db).await
    }

    /// In-memory database for tests
    pub async fn new_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::initialize(db).await
    }

    async fn initialize(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        // Schema definitions: promo codes are unique by code; range scans
        // on created_at back every analytics window query.
        db.query(
            r#"
            DEFINE INDEX IF NOT EXISTS uniq_promo_code ON TABLE promo_code COLUMNS code UNIQUE;
            DEFINE INDEX IF NOT EXISTS order_seller_created ON TABLE order COLUMNS seller, created_at;
            DEFINE INDEX IF NOT EXISTS review_seller_created ON TABLE review COLUMNS seller, created_at;
            "#,
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        tracing::info!("Database connection established (embedded SurrealDB)");
        Ok(Self { db })
    }
}
