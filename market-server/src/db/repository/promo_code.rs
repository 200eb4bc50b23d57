//! Promo Code Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::PromoCode;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const TABLE: &str = "promo_code";

#[derive(Clone)]
pub struct PromoCodeRepository {
    base: BaseRepository,
}

impl PromoCodeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, code: PromoCode) -> RepoResult<PromoCode> {
        // Check duplicate code
        if self.find_by_code(&code.code).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Promo code '{}' already exists",
                code.code
            )));
        }

        let created: Option<PromoCode> = self.base.db().create(TABLE).content(code).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create promo code".to_string()))
    }

    pub async fn find_by_code(&self, code: &str) -> RepoResult<Option<PromoCode>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM promo_code WHERE code = $code LIMIT 1")
            .bind(("code", code.to_string()))
            .await?;
        let codes: Vec<PromoCode> = result.take(0)?;
        Ok(codes.into_iter().next())
    }

    /// Resolve a code only if it is still available. Used by quoting,
    /// which must not consume.
    pub async fn find_available(&self, code: &str) -> RepoResult<Option<PromoCode>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM promo_code WHERE code = $code AND available = true LIMIT 1")
            .bind(("code", code.to_string()))
            .await?;
        let codes: Vec<PromoCode> = result.take(0)?;
        Ok(codes.into_iter().next())
    }

    /// Validate and consume in a single conditional update: the code is
    /// returned (pre-consumption state) only if it was still available,
    /// so two concurrent checkouts cannot both redeem it.
    pub async fn consume(&self, code: &str) -> RepoResult<Option<PromoCode>> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE promo_code SET available = false WHERE code = $code AND available = true RETURN BEFORE",
            )
            .bind(("code", code.to_string()))
            .await?;
        let consumed: Vec<PromoCode> = result.take(0)?;
        Ok(consumed.into_iter().next())
    }

    /// Compensating action: re-open a code when order creation fails
    /// after consumption.
    pub async fn release(&self, code: &str) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE promo_code SET available = true WHERE code = $code")
            .bind(("code", code.to_string()))
            .await?;
        Ok(())
    }
}
