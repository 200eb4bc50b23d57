//! Order Repository
//!
//! Reads and guarded writes for persisted orders. Status transitions go
//! through [`OrderRepository::update_guarded`], which is conditional on
//! the expected current state — a concurrent transition loses with a
//! conflict instead of silently clobbering the record.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Order;
use shared::models::{OrderStatus, PaymentStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid order ID format: {}", id)))
    }

    /// Persist a new order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = Self::parse_id(id)?;
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    /// List a seller's orders, newest first (paginated)
    pub async fn find_by_seller(
        &self,
        seller: &str,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE seller = $seller ORDER BY created_at DESC LIMIT $limit START $offset",
            )
            .bind(("seller", seller.to_string()))
            .bind(("limit", limit))
            .bind(("offset", offset))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// List a client's orders, newest first (paginated)
    pub async fn find_by_client(
        &self,
        client: &str,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE client = $client ORDER BY created_at DESC LIMIT $limit START $offset",
            )
            .bind(("client", client.to_string()))
            .bind(("limit", limit))
            .bind(("offset", offset))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Seller's orders with `created_at` in the half-open range
    /// `[start, end)` — day and week windows.
    pub async fn find_for_seller_between(
        &self,
        seller: &str,
        start: i64,
        end: i64,
    ) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE seller = $seller AND created_at >= $start AND created_at < $end",
            )
            .bind(("seller", seller.to_string()))
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Seller's orders with `created_at` in the inclusive range
    /// `[start, end]` — calendar month windows, `end` at 23:59:59.999.
    pub async fn find_for_seller_through(
        &self,
        seller: &str,
        start: i64,
        end: i64,
    ) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE seller = $seller AND created_at >= $start AND created_at <= $end",
            )
            .bind(("seller", seller.to_string()))
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Merge `data` into the order iff both status axes still hold the
    /// expected values. Returns `Conflict` when the guard fails (the
    /// record was transitioned concurrently).
    pub async fn update_guarded(
        &self,
        id: &str,
        expected_status: OrderStatus,
        expected_payment: PaymentStatus,
        data: serde_json::Value,
    ) -> RepoResult<Order> {
        let record_id = Self::parse_id(id)?;
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $id MERGE $data WHERE status = $expected_status AND payment_status = $expected_payment RETURN AFTER",
            )
            .bind(("id", record_id))
            .bind(("data", data))
            .bind(("expected_status", expected_status))
            .bind(("expected_payment", expected_payment))
            .await?;

        let updated: Vec<Order> = result.take(0)?;
        updated.into_iter().next().ok_or_else(|| {
            RepoError::Conflict(format!("Order {} was modified concurrently", id))
        })
    }
}
