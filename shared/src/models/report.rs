//! Analytics Report Payloads
//!
//! Response shapes for the seller-dashboard reports. Field names are part
//! of the wire contract; percentage figures are rounded to 1 decimal,
//! money to 2.

use serde::{Deserialize, Serialize};

/// Today's order count vs yesterday.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayOrdersReport {
    pub today_orders: i64,
    pub percentage_change: f64,
}

/// Today's revenue vs yesterday.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayRevenueReport {
    pub today_revenue: f64,
    pub percentage_change: f64,
}

/// Today's average review rating vs yesterday.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayRatingReport {
    pub today_rating: f64,
    pub total_reviews: i64,
    pub percentage_change: f64,
}

/// This calendar month vs last. `rating_change` is an absolute delta
/// (stars), not a percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyOverview {
    pub total_orders: i64,
    pub order_percentage_change: f64,
    pub total_sales: f64,
    pub sales_percentage_change: f64,
    pub unique_customers: i64,
    pub customer_percentage_change: f64,
    pub average_rating: f64,
    pub rating_change: f64,
}

/// One weekday bucket, Mon..Sun.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekdayRevenue {
    pub name: String,
    pub revenue: f64,
}

/// Current week (Mon–Sun) revenue by weekday. No comparison window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRevenueReport {
    pub revenue_data: Vec<WeekdayRevenue>,
}

/// One day-of-month bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRevenuePoint {
    /// YYYY-MM-DD
    pub date: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenueReport {
    pub daily_revenue: Vec<DailyRevenuePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOrdersPoint {
    pub date: String,
    pub orders: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOrdersReport {
    pub daily_orders: Vec<DailyOrdersPoint>,
}

/// One hour-of-day bucket (0..23).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyRevenuePoint {
    pub hour: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyRevenueReport {
    pub hourly_revenue: Vec<HourlyRevenuePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyOrdersPoint {
    pub hour: u32,
    pub orders: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyOrdersReport {
    pub hourly_orders: Vec<HourlyOrdersPoint>,
}

/// Dynamic-key distribution: one entry per observed status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDistributionReport {
    pub status_distribution: Vec<StatusCount>,
}

/// One entry per observed payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodBreakdown {
    pub method: String,
    pub count: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsReport {
    pub payment_methods: Vec<PaymentMethodBreakdown>,
}
