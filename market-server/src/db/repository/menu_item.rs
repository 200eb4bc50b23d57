//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::MenuItem;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid menu item ID format: {}", id)))
    }

    pub async fn create(&self, item: MenuItem) -> RepoResult<MenuItem> {
        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let record_id = Self::parse_id(id)?;
        let item: Option<MenuItem> = self.base.db().select(record_id).await?;
        Ok(item)
    }

    pub async fn find_by_seller(&self, seller: &str) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE seller = $seller ORDER BY created_at DESC")
            .bind(("seller", seller.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Merge caller-editable fields. The rating cache is not writable
    /// through this path — see [`MenuItemRepository::update_rating`].
    pub async fn update(&self, id: &str, data: serde_json::Value) -> RepoResult<MenuItem> {
        let record_id = Self::parse_id(id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $id MERGE $data RETURN AFTER")
            .bind(("id", record_id))
            .bind(("data", data))
            .await?;

        let updated: Vec<MenuItem> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Write the derived rating cache. Only the rating aggregator calls
    /// this.
    pub async fn update_rating(&self, id: &str, rating: f64, reviews: i64) -> RepoResult<()> {
        let record_id = Self::parse_id(id)?;
        self.base
            .db()
            .query("UPDATE $id SET rating = $rating, reviews = $reviews, updated_at = $now")
            .bind(("id", record_id))
            .bind(("rating", rating))
            .bind(("reviews", reviews))
            .bind(("now", shared::util::now_millis()))
            .await?;
        Ok(())
    }
}
