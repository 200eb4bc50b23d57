//! Analytics Service
//!
//! Fetch-and-reduce wiring for the dashboard reports. Every report
//! resolves the seller first (fail fast on unknown ids), then pulls the
//! window's records and hands them to the pure reducers. Range reads go
//! through the bounded-retry helper; nothing here writes.

use chrono_tz::Tz;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::analytics::reports::{self, WEEKDAY_NAMES};
use crate::analytics::windows::{self, Window};
use crate::db::models::{Order, Review};
use crate::db::repository::{retry_read, OrderRepository, ReviewRepository, SellerRepository};
use crate::utils::{time, AppResult};
use shared::models::{
    DailyOrdersPoint, DailyOrdersReport, DailyRevenuePoint, DailyRevenueReport,
    HourlyOrdersPoint, HourlyOrdersReport, HourlyRevenuePoint, HourlyRevenueReport,
    MonthlyOverview, PaymentMethodsReport, StatusDistributionReport, TodayOrdersReport,
    TodayRatingReport, TodayRevenueReport, WeekdayRevenue, WeeklyRevenueReport,
};

#[derive(Clone)]
pub struct AnalyticsService {
    orders: OrderRepository,
    reviews: ReviewRepository,
    sellers: SellerRepository,
    tz: Tz,
}

impl AnalyticsService {
    pub fn new(db: Surreal<Db>, tz: Tz) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            reviews: ReviewRepository::new(db.clone()),
            sellers: SellerRepository::new(db),
            tz,
        }
    }

    async fn require_seller(&self, seller: &str) -> AppResult<()> {
        self.sellers.require(seller).await?;
        Ok(())
    }

    /// Orders in a half-open day/week window.
    async fn orders_between(&self, seller: &str, w: Window) -> AppResult<Vec<Order>> {
        Ok(retry_read(|| self.orders.find_for_seller_between(seller, w.start, w.end)).await?)
    }

    /// Orders in an inclusive month window.
    async fn orders_through(&self, seller: &str, w: Window) -> AppResult<Vec<Order>> {
        Ok(retry_read(|| self.orders.find_for_seller_through(seller, w.start, w.end)).await?)
    }

    async fn reviews_between(&self, seller: &str, w: Window) -> AppResult<Vec<Review>> {
        Ok(retry_read(|| {
            self.reviews
                .find_published_for_seller_between(seller, w.start, w.end)
        })
        .await?)
    }

    async fn reviews_through(&self, seller: &str, w: Window) -> AppResult<Vec<Review>> {
        Ok(retry_read(|| {
            self.reviews
                .find_published_for_seller_through(seller, w.start, w.end)
        })
        .await?)
    }

    // ==================== Today vs Yesterday ====================

    /// Today's order count vs yesterday.
    pub async fn orders_today(&self, seller: &str) -> AppResult<TodayOrdersReport> {
        self.require_seller(seller).await?;
        let today = time::today(self.tz);
        let current = self
            .orders_between(seller, windows::day_window(today, self.tz))
            .await?;
        let previous = self
            .orders_between(
                seller,
                windows::day_window(today.pred_opt().unwrap_or(today), self.tz),
            )
            .await?;

        Ok(TodayOrdersReport {
            today_orders: current.len() as i64,
            percentage_change: reports::percentage_change(
                current.len() as f64,
                previous.len() as f64,
            ),
        })
    }

    /// Today's revenue vs yesterday.
    pub async fn revenue_today(&self, seller: &str) -> AppResult<TodayRevenueReport> {
        self.require_seller(seller).await?;
        let today = time::today(self.tz);
        let current = self
            .orders_between(seller, windows::day_window(today, self.tz))
            .await?;
        let previous = self
            .orders_between(
                seller,
                windows::day_window(today.pred_opt().unwrap_or(today), self.tz),
            )
            .await?;

        let today_revenue = reports::sum_revenue(&current);
        Ok(TodayRevenueReport {
            today_revenue,
            percentage_change: reports::percentage_change(
                today_revenue,
                reports::sum_revenue(&previous),
            ),
        })
    }

    /// Today's average review rating vs yesterday.
    pub async fn rating_today(&self, seller: &str) -> AppResult<TodayRatingReport> {
        self.require_seller(seller).await?;
        let today = time::today(self.tz);
        let current = self
            .reviews_between(seller, windows::day_window(today, self.tz))
            .await?;
        let previous = self
            .reviews_between(
                seller,
                windows::day_window(today.pred_opt().unwrap_or(today), self.tz),
            )
            .await?;

        let today_rating = reports::average_rating(&current);
        Ok(TodayRatingReport {
            today_rating,
            total_reviews: current.len() as i64,
            percentage_change: reports::percentage_change(
                today_rating,
                reports::average_rating(&previous),
            ),
        })
    }

    // ==================== Monthly Overview ====================

    /// This calendar month vs last, across orders, revenue, customers,
    /// and rating. The rating figure is an absolute delta, not a
    /// percentage.
    pub async fn monthly_overview(&self, seller: &str) -> AppResult<MonthlyOverview> {
        self.require_seller(seller).await?;
        let today = time::today(self.tz);
        let current_window = windows::month_window(today, self.tz);
        let previous_window = windows::prev_month_window(today, self.tz);

        let current_orders = self.orders_through(seller, current_window).await?;
        let previous_orders = self.orders_through(seller, previous_window).await?;
        let current_reviews = self.reviews_through(seller, current_window).await?;
        let previous_reviews = self.reviews_through(seller, previous_window).await?;

        let total_sales = reports::sum_revenue(&current_orders);
        let previous_sales = reports::sum_revenue(&previous_orders);
        let unique_customers = reports::unique_customers(&current_orders);
        let previous_customers = reports::unique_customers(&previous_orders);
        let average_rating = reports::average_rating(&current_reviews);
        let previous_rating = reports::average_rating(&previous_reviews);

        Ok(MonthlyOverview {
            total_orders: current_orders.len() as i64,
            order_percentage_change: reports::percentage_change(
                current_orders.len() as f64,
                previous_orders.len() as f64,
            ),
            total_sales,
            sales_percentage_change: reports::percentage_change(total_sales, previous_sales),
            unique_customers,
            customer_percentage_change: reports::percentage_change(
                unique_customers as f64,
                previous_customers as f64,
            ),
            average_rating,
            rating_change: reports::delta1(average_rating, previous_rating),
        })
    }

    // ==================== Weekly ====================

    /// Current week (Mon–Sun) revenue by weekday. No comparison window.
    pub async fn weekly_revenue(&self, seller: &str) -> AppResult<WeeklyRevenueReport> {
        self.require_seller(seller).await?;
        let window = windows::week_window(time::today(self.tz), self.tz);
        let orders = self.orders_between(seller, window).await?;
        let buckets = reports::bucket_weekday_revenue(&orders, self.tz);

        Ok(WeeklyRevenueReport {
            revenue_data: WEEKDAY_NAMES
                .iter()
                .zip(buckets.iter())
                .map(|(name, revenue)| WeekdayRevenue {
                    name: name.to_string(),
                    revenue: *revenue,
                })
                .collect(),
        })
    }

    // ==================== Current Month, Daily ====================

    /// One date label per actual day of the current month (YYYY-MM-DD).
    fn month_dates(&self) -> Vec<String> {
        let today = time::today(self.tz);
        let first = time::month_start(today);
        (0..time::days_in_month(today))
            .filter_map(|offset| first.checked_add_days(chrono::Days::new(offset as u64)))
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect()
    }

    /// Daily revenue for the current month.
    pub async fn daily_revenue(&self, seller: &str) -> AppResult<DailyRevenueReport> {
        self.require_seller(seller).await?;
        let window = windows::month_window(time::today(self.tz), self.tz);
        let orders = self.orders_through(seller, window).await?;
        let buckets = reports::bucket_daily_revenue(&orders, self.tz);

        Ok(DailyRevenueReport {
            daily_revenue: self
                .month_dates()
                .into_iter()
                .enumerate()
                .map(|(i, date)| DailyRevenuePoint {
                    date,
                    revenue: buckets[i],
                })
                .collect(),
        })
    }

    /// Daily order counts for the current month.
    pub async fn daily_orders(&self, seller: &str) -> AppResult<DailyOrdersReport> {
        self.require_seller(seller).await?;
        let window = windows::month_window(time::today(self.tz), self.tz);
        let orders = self.orders_through(seller, window).await?;
        let buckets = reports::bucket_daily_counts(&orders, self.tz);

        Ok(DailyOrdersReport {
            daily_orders: self
                .month_dates()
                .into_iter()
                .enumerate()
                .map(|(i, date)| DailyOrdersPoint {
                    date,
                    orders: buckets[i],
                })
                .collect(),
        })
    }

    // ==================== Today, Hourly ====================

    /// Hourly revenue for today.
    pub async fn hourly_revenue(&self, seller: &str) -> AppResult<HourlyRevenueReport> {
        self.require_seller(seller).await?;
        let window = windows::day_window(time::today(self.tz), self.tz);
        let orders = self.orders_between(seller, window).await?;
        let buckets = reports::bucket_hourly_revenue(&orders, self.tz);

        Ok(HourlyRevenueReport {
            hourly_revenue: buckets
                .iter()
                .enumerate()
                .map(|(hour, revenue)| HourlyRevenuePoint {
                    hour: hour as u32,
                    revenue: *revenue,
                })
                .collect(),
        })
    }

    /// Hourly order counts for today.
    pub async fn hourly_orders(&self, seller: &str) -> AppResult<HourlyOrdersReport> {
        self.require_seller(seller).await?;
        let window = windows::day_window(time::today(self.tz), self.tz);
        let orders = self.orders_between(seller, window).await?;
        let buckets = reports::bucket_hourly_counts(&orders, self.tz);

        Ok(HourlyOrdersReport {
            hourly_orders: buckets
                .iter()
                .enumerate()
                .map(|(hour, orders)| HourlyOrdersPoint {
                    hour: hour as u32,
                    orders: *orders,
                })
                .collect(),
        })
    }

    // ==================== Distributions ====================

    /// Order status distribution over the current month.
    pub async fn status_distribution(&self, seller: &str) -> AppResult<StatusDistributionReport> {
        self.require_seller(seller).await?;
        let window = windows::month_window(time::today(self.tz), self.tz);
        let orders = self.orders_through(seller, window).await?;

        Ok(StatusDistributionReport {
            status_distribution: reports::status_distribution(&orders),
        })
    }

    /// Payment method breakdown over the current month.
    pub async fn payment_methods(&self, seller: &str) -> AppResult<PaymentMethodsReport> {
        self.require_seller(seller).await?;
        let window = windows::month_window(time::today(self.tz), self.tz);
        let orders = self.orders_through(seller, window).await?;

        Ok(PaymentMethodsReport {
            payment_methods: reports::payment_method_breakdown(&orders),
        })
    }
}
