// src/history/mod.rs

pub mod provider;
pub mod series;
pub mod source;
pub mod synthetic;
pub mod yahoo;

pub use provider::{SeriesOutcome, SeriesProvider};
pub use series::{DailyClose, PriceSeries};
pub use source::{FetchError, FetchFuture, HistorySource, OfflineSource};
pub use synthetic::{synthesize, synthetic_price};
pub use yahoo::YahooHistorySource;
