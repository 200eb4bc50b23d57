//! Review Repository
//!
//! Only `published` reviews participate in aggregates and reports; the
//! published-only queries filter at the database so the rating
//! aggregator and analytics reducers never see moderated-out records.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Review;
use shared::models::{ReviewResponse, ReviewStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "review";

#[derive(Clone)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid review ID format: {}", id)))
    }

    pub async fn create(&self, review: Review) -> RepoResult<Review> {
        let created: Option<Review> = self.base.db().create(TABLE).content(review).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create review".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Review>> {
        let record_id = Self::parse_id(id)?;
        let review: Option<Review> = self.base.db().select(record_id).await?;
        Ok(review)
    }

    /// All published reviews for a seller (aggregate recompute input)
    pub async fn find_published_by_seller(&self, seller: &str) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query(
                "SELECT * FROM review WHERE seller = $seller AND status = 'published' ORDER BY created_at DESC",
            )
            .bind(("seller", seller.to_string()))
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// All published reviews for a menu item (aggregate recompute input)
    pub async fn find_published_by_menu_item(&self, menu_item: &str) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query(
                "SELECT * FROM review WHERE menu_item = $menu_item AND status = 'published' ORDER BY created_at DESC",
            )
            .bind(("menu_item", menu_item.to_string()))
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Published reviews in the half-open range `[start, end)`
    pub async fn find_published_for_seller_between(
        &self,
        seller: &str,
        start: i64,
        end: i64,
    ) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query(
                "SELECT * FROM review WHERE seller = $seller AND status = 'published' AND created_at >= $start AND created_at < $end",
            )
            .bind(("seller", seller.to_string()))
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Published reviews in the inclusive range `[start, end]`
    pub async fn find_published_for_seller_through(
        &self,
        seller: &str,
        start: i64,
        end: i64,
    ) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query(
                "SELECT * FROM review WHERE seller = $seller AND status = 'published' AND created_at >= $start AND created_at <= $end",
            )
            .bind(("seller", seller.to_string()))
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Attach a seller response
    pub async fn set_response(&self, id: &str, response: ReviewResponse) -> RepoResult<Review> {
        let record_id = Self::parse_id(id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $id SET response = $response, updated_at = $now RETURN AFTER")
            .bind(("id", record_id))
            .bind(("response", response))
            .bind(("now", shared::util::now_millis()))
            .await?;

        let updated: Vec<Review> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Review {} not found", id)))
    }

    /// Moderation status change
    pub async fn set_status(&self, id: &str, status: ReviewStatus) -> RepoResult<Review> {
        let record_id = Self::parse_id(id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $id SET status = $status, updated_at = $now RETURN AFTER")
            .bind(("id", record_id))
            .bind(("status", status))
            .bind(("now", shared::util::now_millis()))
            .await?;

        let updated: Vec<Review> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Review {} not found", id)))
    }

    /// Adjust the helpful counter. The stored value is floored at 0.
    pub async fn bump_helpful(&self, id: &str, delta: i32) -> RepoResult<Review> {
        let record_id = Self::parse_id(id)?;
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $id SET helpful_count = math::max([helpful_count + $delta, 0]), updated_at = $now RETURN AFTER",
            )
            .bind(("id", record_id))
            .bind(("delta", delta as i64))
            .bind(("now", shared::util::now_millis()))
            .await?;

        let updated: Vec<Review> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Review {} not found", id)))
    }
}
