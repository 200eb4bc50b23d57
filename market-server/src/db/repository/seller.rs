//! Seller Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Seller;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "seller";

#[derive(Clone)]
pub struct SellerRepository {
    base: BaseRepository,
}

impl SellerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid seller ID format: {}", id)))
    }

    pub async fn create(&self, seller: Seller) -> RepoResult<Seller> {
        let created: Option<Seller> = self.base.db().create(TABLE).content(seller).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create seller".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Seller>> {
        let record_id = Self::parse_id(id)?;
        let seller: Option<Seller> = self.base.db().select(record_id).await?;
        Ok(seller)
    }

    /// Resolve the seller or fail fast — every report and lifecycle call
    /// goes through this before touching anything else.
    pub async fn require(&self, id: &str) -> RepoResult<Seller> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Seller {} not found", id)))
    }

    /// Write the derived rating cache. Only the rating aggregator calls
    /// this.
    pub async fn update_rating(&self, id: &str, rating: f64, reviews: i64) -> RepoResult<()> {
        let record_id = Self::parse_id(id)?;
        self.base
            .db()
            .query("UPDATE $id SET rating = $rating, reviews = $reviews")
            .bind(("id", record_id))
            .bind(("rating", rating))
            .bind(("reviews", reviews))
            .await?;
        Ok(())
    }
}
