// src/history/source.rs

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use thiserror::Error;

use super::series::DailyClose;

/// Why an upstream history fetch produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream reported: {0}")]
    Upstream(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("no price data returned")]
    Empty,
    #[error("upstream fetching is disabled")]
    Disabled,
}

pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<DailyClose>, FetchError>> + Send + 'a>>;

/// A market-data collaborator that can return roughly one year of daily closes.
pub trait HistorySource: Send + Sync {
    fn trailing_year<'a>(&'a self, symbol: &'a str) -> FetchFuture<'a>;
}

/// Source that never reaches the network. Every symbol ends up synthesized.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSource;

impl HistorySource for OfflineSource {
    fn trailing_year<'a>(&'a self, _symbol: &'a str) -> FetchFuture<'a> {
        Box::pin(async { Err(FetchError::Disabled) })
    }
}
