// src/history/synthetic.rs

//! Deterministic stand-in history used when the upstream fetch fails.
//!
//! The curve is a slow linear climb with a gentle sine wobble on top. No
//! randomness is involved, so the same base and day always produce the same
//! series.

use super::series::{DailyClose, PriceSeries};
use crate::rounding::round_price;
use crate::stocks::synthesis_profile;
use time::{Date, Duration};

/// Number of points in a synthetic history.
pub const SYNTHETIC_POINTS: usize = 365;
/// Linear growth per day, relative to the base price.
pub const TREND_PER_DAY: f64 = 0.005;
/// Amplitude of the oscillation, relative to the base price.
pub const WAVE_AMPLITUDE: f64 = 0.02;
/// The wave argument advances by `1 / WAVE_PERIOD_DAYS` each day.
pub const WAVE_PERIOD_DAYS: f64 = 30.0;

/// Price of day `i`: `round(base * (1 + 0.005 i + 0.02 sin(i / 30)), 2)`.
#[inline]
pub fn synthetic_price(base: f64, i: usize) -> f64 {
    let i = i as f64;
    round_price(base * (1.0 + TREND_PER_DAY * i + WAVE_AMPLITUDE * (i / WAVE_PERIOD_DAYS).sin()))
}

/// 365 days ending the day before `today`, anchored on `base`.
///
/// Point `i` is dated `today - (365 - i)` days.
pub fn synthesize_from_base(base: f64, today: Date) -> PriceSeries {
    let closes = (0..SYNTHETIC_POINTS)
        .filter_map(|i| {
            let back = Duration::days((SYNTHETIC_POINTS - i) as i64);
            today
                .checked_sub(back)
                .map(|date| DailyClose::new(date, synthetic_price(base, i)))
        })
        .collect();
    PriceSeries::from_closes(closes, false)
}

/// Synthetic history for `symbol`. Unknown symbols use the SPY base price.
pub fn synthesize(symbol: &str, today: Date) -> PriceSeries {
    synthesize_from_base(synthesis_profile(symbol).base_price, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn every_point_follows_the_formula() {
        let base = 175.0;
        let series = synthesize_from_base(base, date!(2026 - 10 - 19));
        assert_eq!(series.len(), SYNTHETIC_POINTS);
        for (i, price) in series.prices().iter().enumerate() {
            let x = i as f64;
            let expected = ((base * (1.0 + 0.005 * x + 0.02 * (x / 30.0).sin())) * 100.0).round() / 100.0;
            assert_eq!(*price, expected, "day {i}");
        }
    }

    #[test]
    fn known_values_for_apple_base() {
        assert_eq!(synthetic_price(175.0, 0), 175.0);
        assert_eq!(synthetic_price(175.0, 1), 175.99);
        assert_eq!(synthetic_price(175.0, 30), 204.2);
        assert_eq!(synthetic_price(175.0, 100), 261.83);
        assert_eq!(synthetic_price(175.0, 364), 492.03);
    }

    #[test]
    fn dates_end_the_day_before_today() {
        let today = date!(2026 - 10 - 19);
        let series = synthesize("AAPL", today);

        assert_eq!(series.dates().first(), Some(&date!(2025 - 10 - 19)));
        assert_eq!(series.dates().last(), Some(&date!(2026 - 10 - 18)));
        assert!(series.dates().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(series.dates().len(), series.prices().len());
        assert!(!series.is_real());
    }

    #[test]
    fn weekends_are_included() {
        // Calendar days, not trading days.
        let series = synthesize("TSLA", date!(2026 - 10 - 19));
        assert!(series.dates().iter().any(|d| crate::calendar::is_weekend(*d)));
    }

    #[test]
    fn unknown_symbol_uses_spy_base() {
        let today = date!(2026 - 10 - 19);
        let unknown = synthesize("ZZZZ", today);
        let spy = synthesize("SPY", today);
        assert_eq!(unknown, spy);
        assert_eq!(unknown.prices()[0], 450.0);
        assert_eq!(unknown.prices()[364], 1265.22);
    }

    #[test]
    fn synthesis_is_deterministic() {
        let today = date!(2024 - 02 - 29);
        assert_eq!(synthesize("AAPL", today), synthesize("AAPL", today));
    }
}
