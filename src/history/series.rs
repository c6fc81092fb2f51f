// src/history/series.rs

use crate::rounding::round_price;
use time::Date;

/// One daily close as reported by a market-data source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyClose {
    pub date: Date,
    pub close: f64,
}

impl DailyClose {
    pub fn new(date: Date, close: f64) -> Self {
        Self { date, close }
    }
}

/// Index-aligned daily history.
///
/// `dates` and `prices` always have the same length and `dates` is strictly
/// increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    dates: Vec<Date>,
    prices: Vec<f64>,
    is_real: bool,
}

impl PriceSeries {
    /// Builds a series from upstream closes.
    ///
    /// Closes are sorted by date and rounded to the cent. Non-finite or
    /// non-positive closes are dropped. When two closes share a date the
    /// later one wins.
    pub fn from_closes(mut closes: Vec<DailyClose>, is_real: bool) -> Self {
        closes.sort_by_key(|c| c.date);

        let mut dates: Vec<Date> = Vec::with_capacity(closes.len());
        let mut prices: Vec<f64> = Vec::with_capacity(closes.len());
        for c in closes {
            if !c.close.is_finite() || c.close <= 0.0 {
                continue;
            }
            let price = round_price(c.close);
            match dates.last() {
                Some(last) if *last == c.date => {
                    if let Some(p) = prices.last_mut() {
                        *p = price;
                    }
                }
                _ => {
                    dates.push(c.date);
                    prices.push(price);
                }
            }
        }

        Self {
            dates,
            prices,
            is_real,
        }
    }

    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn is_real(&self) -> bool {
        self.is_real
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn closes_are_sorted_rounded_and_deduplicated() {
        let series = PriceSeries::from_closes(
            vec![
                DailyClose::new(date!(2026 - 10 - 16), 101.004),
                DailyClose::new(date!(2026 - 10 - 14), 99.996),
                DailyClose::new(date!(2026 - 10 - 15), 100.5),
                DailyClose::new(date!(2026 - 10 - 16), 101.126),
            ],
            true,
        );

        assert_eq!(
            series.dates(),
            &[date!(2026 - 10 - 14), date!(2026 - 10 - 15), date!(2026 - 10 - 16)]
        );
        assert_eq!(series.prices(), &[100.0, 100.5, 101.13]);
        assert!(series.is_real());
            }

    #[test]
    fn unusable_closes_are_dropped() {
        let series = PriceSeries::from_closes(
            vec![
                DailyClose::new(date!(2026 - 10 - 14), f64::NAN),
                DailyClose::new(date!(2026 - 10 - 15), -3.0),
                DailyClose::new(date!(2026 - 10 - 16), 12.0),
            ],
            true,
        );
        assert_eq!(series.len(), 1);
        assert_eq!(series.dates().len(), series.prices().len());
    }

    #[test]
    fn empty_input_is_empty_series() {
        let series = PriceSeries::from_closes(Vec::new(), true);
        assert!(series.is_empty());
        assert!(series.prices().is_empty());
    }
}
