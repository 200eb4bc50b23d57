//! Time utilities — business-timezone conversion
//!
//! All date → timestamp conversion happens at this layer; repositories
//! only ever see `i64` Unix millis. Window boundaries follow the report
//! contracts: day windows are half-open `[start, end)`, month windows are
//! inclusive `[start, end]` with `end` at 23:59:59.999 local time.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Date + h/m/s → Unix millis in the business timezone.
///
/// DST gap fallback: if the local time does not exist (spring-forward),
/// fall back to interpreting the naive time as UTC.
pub fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(hour, min, sec).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of day (00:00:00) → Unix millis.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 0, 0, 0, tz)
}

/// End of day → next day 00:00:00 Unix millis; callers use `< end`.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_hms_to_millis(next_day, 0, 0, 0, tz)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month before the one containing `date`.
pub fn prev_month_start(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    month_start(first.pred_opt().unwrap_or(first))
}

/// First day of the month after the one containing `date`.
pub fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (y, m) = (date.year(), date.month());
    if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1).unwrap()
    }
}

/// Inclusive month end: last local millisecond (23:59:59.999) of the
/// month containing `date`. Callers use `<= end`.
pub fn month_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    day_start_millis(next_month_start(date), tz) - 1
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = month_start(date);
    next_month_start(first)
        .pred_opt()
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// Unix millis → local datetime in the business timezone.
pub fn local_datetime(millis: i64, tz: Tz) -> DateTime<Tz> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .with_timezone(&tz)
}

/// Today's date in the business timezone.
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}
