//! Report Reducers
//!
//! Pure aggregation over fetched records: scalar window aggregates,
//! fixed-cardinality bucketing (day-of-month, hour-of-day, weekday), and
//! dynamic-key distributions. Revenue sums run on `Decimal` and round
//! once on the way out; percentage figures round to 1 decimal place.

use rust_decimal::prelude::*;
use std::collections::BTreeMap;

use chrono::{Datelike, Timelike};
use chrono_tz::Tz;

use crate::db::models::{Order, Review};
use crate::pricing::{to_decimal, to_f64};
use crate::utils::time;
use shared::models::{PaymentMethodBreakdown, StatusCount};

/// Weekday bucket labels, index 0 = Monday .. index 6 = Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// ==================== Percentage Change ====================

/// Period-over-period percentage change, rounded to 1 decimal place.
///
/// - comparison > 0 → ((current − comparison) / comparison) × 100
/// - comparison = 0, current > 0 → 100 ("went from nothing to something")
/// - both zero → 0
pub fn percentage_change(current: f64, comparison: f64) -> f64 {
    if comparison > 0.0 {
        let change = (to_decimal(current) - to_decimal(comparison)) / to_decimal(comparison)
            * Decimal::ONE_HUNDRED;
        round1(change)
    } else if current > 0.0 {
        100.0
    } else {
        0.0
    }
}

fn round1(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Absolute delta rounded to 1 decimal place (monthly rating change).
pub fn delta1(current: f64, comparison: f64) -> f64 {
    round1(to_decimal(current) - to_decimal(comparison))
}

// ==================== Scalar Aggregates ====================

/// Σ total_amount, rounded to 2 decimal places.
pub fn sum_revenue(orders: &[Order]) -> f64 {
    let total: Decimal = orders.iter().map(|o| to_decimal(o.total_amount)).sum();
    to_f64(total)
}

/// Distinct client ids.
pub fn unique_customers(orders: &[Order]) -> i64 {
    let clients: std::collections::BTreeSet<&str> =
        orders.iter().map(|o| o.client.as_str()).collect();
    clients.len() as i64
}

/// Average of published review ratings, 0 when empty.
pub fn average_rating(reviews: &[Review]) -> f64 {
    crate::reviews::rating::average_rating(reviews)
}

// ==================== Fixed Buckets ====================

/// 31 day-of-month revenue buckets. Days past the month's real length
/// stay zero-filled.
pub fn bucket_daily_revenue(orders: &[Order], tz: Tz) -> [f64; 31] {
    let mut buckets = [Decimal::ZERO; 31];
    for order in orders {
        let day = time::local_datetime(order.created_at, tz).day() as usize;
        if (1..=31).contains(&day) {
            buckets[day - 1] += to_decimal(order.total_amount);
        }
    }
    buckets.map(to_f64)
}

/// 31 day-of-month order-count buckets.
pub fn bucket_daily_counts(orders: &[Order], tz: Tz) -> [i64; 31] {
    let mut buckets = [0i64; 31];
    for order in orders {
        let day = time::local_datetime(order.created_at, tz).day() as usize;
        if (1..=31).contains(&day) {
            buckets[day - 1] += 1;
        }
    }
    buckets
}

/// 24 hour-of-day revenue buckets.
pub fn bucket_hourly_revenue(orders: &[Order], tz: Tz) -> [f64; 24] {
    let mut buckets = [Decimal::ZERO; 24];
    for order in orders {
        let hour = time::local_datetime(order.created_at, tz).hour() as usize;
        buckets[hour % 24] += to_decimal(order.total_amount);
    }
    buckets.map(to_f64)
}

/// 24 hour-of-day order-count buckets.
pub fn bucket_hourly_counts(orders: &[Order], tz: Tz) -> [i64; 24] {
    let mut buckets = [0i64; 24];
    for order in orders {
        let hour = time::local_datetime(order.created_at, tz).hour() as usize;
        buckets[hour % 24] += 1;
    }
    buckets
}

/// 7 weekday revenue buckets, Mon..Sun. Sunday lands at index 6.
pub fn bucket_weekday_revenue(orders: &[Order], tz: Tz) -> [f64; 7] {
    let mut buckets = [Decimal::ZERO; 7];
    for order in orders {
        let idx = time::local_datetime(order.created_at, tz)
            .weekday()
            .num_days_from_monday() as usize;
        buckets[idx % 7] += to_decimal(order.total_amount);
    }
    buckets.map(to_f64)
}

// ==================== Dynamic Distributions ====================

/// Order count per observed status value.
pub fn status_distribution(orders: &[Order]) -> Vec<StatusCount> {
    let mut counts: BTreeMap<&'static str, i64> = BTreeMap::new();
    for order in orders {
        *counts.entry(order.status.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(status, count)| StatusCount {
            status: status.to_string(),
            count,
        })
        .collect()
}

/// Count and revenue per observed payment method. Orders without a
/// recorded method group under "unknown".
pub fn payment_method_breakdown(orders: &[Order]) -> Vec<PaymentMethodBreakdown> {
    let mut groups: BTreeMap<String, (i64, Decimal)> = BTreeMap::new();
    for order in orders {
        let method = order
            .payment_method
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        let entry = groups.entry(method).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += to_decimal(order.total_amount);
    }
    groups
        .into_iter()
        .map(|(method, (count, revenue))| PaymentMethodBreakdown {
            method,
            count,
            revenue: to_f64(revenue),
        })
        .collect()
}

// ==================== Tests ====================
