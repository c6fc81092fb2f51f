// src/calendar.rs

//! Calendar helpers: ISO date formatting and the trading-day projection.
//!
//! A trading day is any Monday to Friday. Exchange holidays are not modeled.

use std::iter;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Weekday};

/// `YYYY-MM-DD`.
pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Default length of a projection, one calendar year of points.
pub const PROJECTION_DAYS: usize = 365;

pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(ISO_DATE)
}

pub fn format_dates(dates: &[Date]) -> Result<Vec<String>, time::error::Format> {
    dates.iter().copied().map(format_date).collect()
}

pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, ISO_DATE)
}

#[inline]
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// The next `count` weekdays strictly after `from`.
///
/// The output is strictly increasing and never contains `from`. It is
/// shorter than `count` only if the calendar runs out of representable
/// dates.
pub fn project_trading_days(from: Date, count: usize) -> Vec<Date> {
    iter::successors(from.next_day(), |d| d.next_day())
        .filter(|d| !is_weekend(*d))
        .take(count)
        .collect()
}

// ──────────────────────────────────────────────────────────────────────────────
//  Unit tests for the projector
// ──────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn full_year_projection_has_365_weekdays() {
        let from = date!(2026 - 10 - 19);
        let days = project_trading_days(from, PROJECTION_DAYS);

        assert_eq!(days.len(), PROJECTION_DAYS);
        assert!(days[0] > from);
        assert!(days.iter().all(|d| !is_weekend(*d)));
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn friday_rolls_over_the_weekend() {
        let friday = date!(2026 - 10 - 23);
        let days = project_trading_days(friday, 3);
        assert_eq!(
            days,
            vec![date!(2026 - 10 - 26), date!(2026 - 10 - 27), date!(2026 - 10 - 28)]
        );
    }

    #[test]
    fn weekend_start_begins_on_monday() {
        let saturday = date!(2026 - 10 - 24);
        assert_eq!(project_trading_days(saturday, 1), vec![date!(2026 - 10 - 26)]);
        let sunday = date!(2026 - 10 - 25);
        assert_eq!(project_trading_days(sunday, 1), vec![date!(2026 - 10 - 26)]);
    }

    #[test]
    fn consecutive_days_never_skip_a_weekday() {
        let days = project_trading_days(date!(2024 - 02 - 27), 10);
        // Leap day is a Thursday in 2024.
        assert!(days.contains(&date!(2024 - 02 - 29)));
        for w in days.windows(2) {
            let gap = (w[1] - w[0]).whole_days();
            if w[0].weekday() == Weekday::Friday {
                assert_eq!(gap, 3);
            } else {
                assert_eq!(gap, 1);
            }
        }
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(project_trading_days(date!(2026 - 10 - 19), 0).is_empty());
    }

    #[test]
    fn end_of_calendar_truncates_instead_of_panicking() {
        let days = project_trading_days(Date::MAX, 5);
        assert!(days.is_empty());
    }

    #[test]
    fn formats_and_parses_iso_dates() {
        let d = date!(2026 - 01 - 05);
        let s = format_date(d).unwrap();
        assert_eq!(s, "2026-01-05");
        assert_eq!(parse_date(&s).unwrap(), d);
        assert_eq!(
            format_dates(&[d, date!(2026 - 12 - 31)]).unwrap(),
            vec!["2026-01-05", "2026-12-31"]
        );
    }
}
