// src/history/provider.rs

use std::sync::Arc;
use std::time::Duration;

use time::Date;

use super::series::PriceSeries;
use super::source::{FetchError, HistorySource};
use super::synthetic::synthesize;

/// What [`SeriesProvider::get_series`] ended up serving.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesOutcome {
    /// Upstream data.
    Fetched(PriceSeries),
    /// The fetch failed; `series` is the synthetic stand-in.
    Synthesized { series: PriceSeries, reason: FetchError },
}

impl SeriesOutcome {
    pub fn series(&self) -> &PriceSeries {
        match self {
            Self::Fetched(series) | Self::Synthesized { series, .. } => series,
        }
    }

    pub fn into_series(self) -> PriceSeries {
        match self {
            Self::Fetched(series) | Self::Synthesized { series, .. } => series,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn fallback_reason(&self) -> Option<&FetchError> {
        match self {
            Self::Fetched(_) => None,
            Self::Synthesized { reason, .. } => Some(reason),
        }
    }
}

/// Real history when the upstream cooperates, synthetic history otherwise.
#[derive(Clone)]
pub struct SeriesProvider {
    source: Arc<dyn HistorySource>,
    timeout: Duration,
}

impl SeriesProvider {
    /// `timeout` bounds the whole fetch, whatever the source does internally.
    pub fn new(source: Arc<dyn HistorySource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Never fails: any fetch problem is logged and replaced by synthesis.
    pub async fn get_series(&self, symbol: &str, today: Date) -> SeriesOutcome {
        match self.fetch(symbol).await {
            Ok(series) => {
                tracing::debug!(symbol, points = series.len(), "fetched upstream history");
                SeriesOutcome::Fetched(series)
            }
            Err(reason) => {
                tracing::warn!(symbol, %reason, "using fallback data");
                SeriesOutcome::Synthesized {
                    series: synthesize(symbol, today),
                    reason,
                }
            }
        }
    }

    async fn fetch(&self, symbol: &str) -> Result<PriceSeries, FetchError> {
        let closes = tokio::time::timeout(self.timeout, self.source.trailing_year(symbol))
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        let series = PriceSeries::from_closes(closes, true);
        if series.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(series)
    }
}
