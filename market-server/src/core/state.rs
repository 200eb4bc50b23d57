//! Server state — shared handles for all request handlers
//!
//! Cheap to clone: the database handle and every service are `Arc`-backed
//! internally.

use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::analytics::AnalyticsService;
use crate::core::Config;
use crate::db::DbService;
use crate::orders::OrderService;
use crate::reviews::ReviewService;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub orders: OrderService,
    pub reviews: ReviewService,
    pub analytics: AnalyticsService,
}

impl ServerState {
    fn build(config: Config, db: Surreal<Db>) -> Self {
        let orders = OrderService::new(db.clone(), config.transition_policy());
        let reviews = ReviewService::new(db.clone());
        let analytics = AnalyticsService::new(db.clone(), config.timezone);
        Self {
            config,
            db,
            orders,
            reviews,
            analytics,
        }
    }

    /// Initialize with the on-disk database under `work_dir/database`.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = db_dir.join("market.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::build(config.clone(), db_service.db))
    }

    /// Initialize with an in-memory database (tests).
    pub async fn initialize_in_memory(config: &Config) -> AppResult<Self> {
        let db_service = DbService::new_memory().await?;
        Ok(Self::build(config.clone(), db_service.db))
    }
}
