//! Review Service
//!
//! Review creation, seller responses, helpful votes, and moderation.
//! Every event that can change the published set hands the review to the
//! rating aggregator afterwards; the two writes are not atomic, which is
//! acceptable because the recompute is idempotent.

use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::db::models::Review;
use crate::db::repository::{MenuItemRepository, ReviewRepository, SellerRepository};
use crate::reviews::rating::RatingAggregator;
use crate::utils::{AppError, AppResult};
use shared::models::{
    HelpfulVote, ReviewCreate, ReviewResponse, ReviewResponseInput, ReviewStatus,
    ReviewStatusUpdate,
};

#[derive(Clone)]
pub struct ReviewService {
    reviews: ReviewRepository,
    menu_items: MenuItemRepository,
    sellers: SellerRepository,
    aggregator: RatingAggregator,
}

impl ReviewService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            reviews: ReviewRepository::new(db.clone()),
            menu_items: MenuItemRepository::new(db.clone()),
            sellers: SellerRepository::new(db.clone()),
            aggregator: RatingAggregator::new(db),
        }
    }

    /// Create a review and recompute the affected aggregates.
    pub async fn create_review(&self, req: ReviewCreate) -> AppResult<Review> {
        if !(1..=5).contains(&req.rating) {
            return Err(AppError::validation(format!(
                "rating must be an integer between 1 and 5, got {}",
                req.rating
            )));
        }

        self.sellers.require(&req.seller_id).await?;
        if let Some(menu_item) = &req.menu_item_id {
            self.menu_items
                .find_by_id(menu_item)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(format!("Menu item {} not found", menu_item))
                })?;
        }

        let now = shared::util::now_millis();
        let review = Review {
            id: None,
            seller: req.seller_id,
            client: req.client_id,
            menu_item: req.menu_item_id,
            order_ref: req.order_ref,
            rating: req.rating,
            comment: req.comment,
            status: ReviewStatus::Published,
            response: None,
            helpful_count: 0,
            created_at: now,
            updated_at: now,
        };

        let created = self.reviews.create(review).await?;
        self.aggregator.on_review_event(&created).await?;

        tracing::info!(
            review = %created.id_string(),
            seller = %created.seller,
            rating = created.rating,
            "review created"
        );
        Ok(created)
    }

    /// Attach the seller's response.
    pub async fn respond(&self, id: &str, input: ReviewResponseInput) -> AppResult<Review> {
        if input.text.trim().is_empty() {
            return Err(AppError::validation("response text must not be empty"));
        }
        let response = ReviewResponse {
            responder: input.responder,
            text: input.text,
            date: shared::util::now_millis(),
        };
        Ok(self.reviews.set_response(id, response).await?)
    }

    /// Helpful vote: ±1, floored at 0 in storage.
    pub async fn vote_helpful(&self, id: &str, vote: HelpfulVote) -> AppResult<Review> {
        if vote.delta != 1 && vote.delta != -1 {
            return Err(AppError::validation(format!(
                "delta must be 1 or -1, got {}",
                vote.delta
            )));
        }
        Ok(self.reviews.bump_helpful(id, vote.delta).await?)
    }

    /// Moderation: changing the published state re-runs the aggregates.
    pub async fn moderate(&self, id: &str, update: ReviewStatusUpdate) -> AppResult<Review> {
        let updated = self.reviews.set_status(id, update.status).await?;
        self.aggregator.on_review_event(&updated).await?;
        Ok(updated)
    }

    pub async fn list_published(&self, seller: &str) -> AppResult<Vec<Review>> {
        self.sellers.require(seller).await?;
        Ok(self.reviews.find_published_by_seller(seller).await?)
    }
}
