//! Analytics API Handlers
//!
//! Thin wrappers over the analytics service — one handler per report.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{
    DailyOrdersReport, DailyRevenueReport, HourlyOrdersReport, HourlyRevenueReport,
    MonthlyOverview, PaymentMethodsReport, StatusDistributionReport, TodayOrdersReport,
    TodayRatingReport, TodayRevenueReport, WeeklyRevenueReport,
};

/// GET /api/analytics/{seller_id}/orders/today
pub async fn orders_today(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<TodayOrdersReport>> {
    Ok(Json(state.analytics.orders_today(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/revenue/today
pub async fn revenue_today(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<TodayRevenueReport>> {
    Ok(Json(state.analytics.revenue_today(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/rating/today
pub async fn rating_today(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<TodayRatingReport>> {
    Ok(Json(state.analytics.rating_today(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/overview/monthly
pub async fn monthly_overview(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<MonthlyOverview>> {
    Ok(Json(state.analytics.monthly_overview(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/revenue/weekly
pub async fn weekly_revenue(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<WeeklyRevenueReport>> {
    Ok(Json(state.analytics.weekly_revenue(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/revenue/daily
pub async fn daily_revenue(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<DailyRevenueReport>> {
    Ok(Json(state.analytics.daily_revenue(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/orders/daily
pub async fn daily_orders(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<DailyOrdersReport>> {
    Ok(Json(state.analytics.daily_orders(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/revenue/hourly
pub async fn hourly_revenue(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<HourlyRevenueReport>> {
    Ok(Json(state.analytics.hourly_revenue(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/orders/hourly
pub async fn hourly_orders(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<HourlyOrdersReport>> {
    Ok(Json(state.analytics.hourly_orders(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/status-distribution
pub async fn status_distribution(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<StatusDistributionReport>> {
    Ok(Json(state.analytics.status_distribution(&seller_id).await?))
}

/// GET /api/analytics/{seller_id}/payment-methods
pub async fn payment_methods(
    State(state): State<ServerState>,
    Path(seller_id): Path<String>,
) -> AppResult<Json<PaymentMethodsReport>> {
    Ok(Json(state.analytics.payment_methods(&seller_id).await?))
}
