//! Report Windows
//!
//! Current/comparison time range resolution. Day and week windows are
//! half-open `[start, end)`; calendar month windows are inclusive
//! `[start, end]` with `end` at the month's last local millisecond.
//! All boundaries are computed in the business timezone.

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;

use crate::utils::time;

/// A resolved time range in Unix millis. Whether `end` is inclusive is a
/// property of the report that produced the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: i64,
    pub end: i64,
}

/// `[00:00, next 00:00)` of the given local date.
pub fn day_window(date: NaiveDate, tz: Tz) -> Window {
    Window {
        start: time::day_start_millis(date, tz),
        end: time::day_end_millis(date, tz),
    }
}

/// Inclusive calendar month containing `date`: `[1st 00:00:00.000,
/// last day 23:59:59.999]`.
pub fn month_window(date: NaiveDate, tz: Tz) -> Window {
    Window {
        start: time::day_start_millis(time::month_start(date), tz),
        end: time::month_end_millis(date, tz),
    }
}

/// Inclusive calendar month before the one containing `date`.
pub fn prev_month_window(date: NaiveDate, tz: Tz) -> Window {
    month_window(time::prev_month_start(date), tz)
}

/// `[Monday 00:00, next Monday 00:00)` of the week containing `date`.
/// The weekly report has no comparison window.
pub fn week_window(date: NaiveDate, tz: Tz) -> Window {
    let monday = time::week_start(date);
    Window {
        start: time::day_start_millis(monday, tz),
        end: time::day_start_millis(monday + Duration::days(7), tz),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TZ: Tz = chrono_tz::UTC;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_windows_tile_without_overlap() {
        let today = day_window(date(2024, 6, 10), TZ);
        let yesterday = day_window(date(2024, 6, 9), TZ);
        assert_eq!(yesterday.end, today.start);
    }

    #[test]
    fn month_window_end_is_inclusive_last_millisecond() {
        let w = month_window(date(2024, 6, 15), TZ);
        let july_start = time::day_start_millis(date(2024, 7, 1), TZ);
        assert_eq!(w.start, time::day_start_millis(date(2024, 6, 1), TZ));
        assert_eq!(w.end, july_start - 1);
    }

    #[test]
    fn prev_month_window_abuts_current() {
        let current = month_window(date(2024, 3, 20), TZ);
        let previous = prev_month_window(date(2024, 3, 20), TZ);
        assert_eq!(previous.end + 1, current.start);
        assert_eq!(
            previous.start,
            time::day_start_millis(date(2024, 2, 1), TZ)
        );
    }

    #[test]
    fn week_window_spans_monday_to_monday() {
        // 2024-06-13 is a Thursday; week runs Mon 06-10 .. Mon 06-17
        let w = week_window(date(2024, 6, 13), TZ);
        assert_eq!(w.start, time::day_start_millis(date(2024, 6, 10), TZ));
        assert_eq!(w.end, time::day_start_millis(date(2024, 6, 17), TZ));
    }
}
