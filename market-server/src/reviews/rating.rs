//! Rating Aggregator
//!
//! Recomputes a seller's or menu item's `{rating, reviews}` cache from
//! the full set of published reviews whenever a review is created or its
//! published state changes. A full recompute, not an incremental running
//! average: correctness wins over O(1) updates at expected review
//! volumes, and rerunning it always converges to the true average, which
//! is what repairs the stale reads two concurrent submissions can take.

use rust_decimal::prelude::*;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::db::models::Review;
use crate::db::repository::{MenuItemRepository, ReviewRepository, SellerRepository};
use crate::utils::AppResult;

/// Average of published ratings, rounded to 2 decimal places.
/// Zero reviews → 0, never NaN.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: Decimal = reviews.iter().map(|r| Decimal::from(r.rating)).sum();
    let avg = sum / Decimal::from(reviews.len());
    crate::pricing::to_f64(avg)
}

#[derive(Clone)]
pub struct RatingAggregator {
    reviews: ReviewRepository,
    menu_items: MenuItemRepository,
    sellers: SellerRepository,
}

impl RatingAggregator {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            reviews: ReviewRepository::new(db.clone()),
            menu_items: MenuItemRepository::new(db.clone()),
            sellers: SellerRepository::new(db),
        }
    }

    /// Recompute the aggregate for every target the review names.
    pub async fn on_review_event(&self, review: &Review) -> AppResult<()> {
        self.recompute_seller(&review.seller).await?;
        if let Some(menu_item) = &review.menu_item {
            self.recompute_menu_item(menu_item).await?;
        }
        Ok(())
    }

    /// Recompute and persist a seller's rating cache.
    pub async fn recompute_seller(&self, seller: &str) -> AppResult<()> {
        let published = self.reviews.find_published_by_seller(seller).await?;
        let rating = average_rating(&published);
        let count = published.len() as i64;
        self.sellers.update_rating(seller, rating, count).await?;
        tracing::debug!(seller, rating, count, "seller rating recomputed");
        Ok(())
    }

    /// Recompute and persist a menu item's rating cache.
    pub async fn recompute_menu_item(&self, menu_item: &str) -> AppResult<()> {
        let published = self.reviews.find_published_by_menu_item(menu_item).await?;
        let rating = average_rating(&published);
        let count = published.len() as i64;
        self.menu_items
            .update_rating(menu_item, rating, count)
            .await?;
        tracing::debug!(menu_item, rating, count, "menu item rating recomputed");
        Ok(())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ReviewStatus;

    fn make_review(rating: i32) -> Review {
        Review {
            id: None,
            seller: "seller:s1".to_string(),
            client: "client:c1".to_string(),
            menu_item: None,
            order_ref: None,
            rating,
            comment: String::new(),
            status: ReviewStatus::Published,
            response: None,
            helpful_count: 0,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn zero_reviews_average_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_over_mixed_ratings() {
        let reviews: Vec<Review> = [5, 4, 3].into_iter().map(make_review).collect();
        assert_eq!(average_rating(&reviews), 4.0);

        let reviews: Vec<Review> = [5, 4].into_iter().map(make_review).collect();
        assert_eq!(average_rating(&reviews), 4.5);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        // (5 + 4 + 4) / 3 = 4.333... -> 4.33
        let reviews: Vec<Review> = [5, 4, 4].into_iter().map(make_review).collect();
        assert_eq!(average_rating(&reviews), 4.33);

        // (5 + 5 + 4) / 3 = 4.666... -> 4.67
        let reviews: Vec<Review> = [5, 5, 4].into_iter().map(make_review).collect();
        assert_eq!(average_rating(&reviews), 4.67);
    }

    #[test]
    fn recompute_is_idempotent() {
        let reviews: Vec<Review> = [1, 3, 5, 5].into_iter().map(make_review).collect();
        let first = average_rating(&reviews);
        let second = average_rating(&reviews);
        assert_eq!(first, second);
    }
}
