// src/history/yahoo.rs

use std::time::Duration;

use serde::Deserialize;
use time::{OffsetDateTime, UtcOffset};

use super::series::DailyClose;
use super::source::{FetchError, FetchFuture, HistorySource};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = concat!("stock_simulator/", env!("CARGO_PKG_VERSION"));

/// Daily closes from the Yahoo Finance chart API.
#[derive(Debug, Clone)]
pub struct YahooHistorySource {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl YahooHistorySource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self::with_client(client, base_url, timeout))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn chart_url(&self, symbol: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}?range=1y&interval=1d",
            self.base_url,
            urlencoding::encode(symbol)
        )
    }

    async fn fetch(&self, symbol: &str) -> Result<Vec<DailyClose>, FetchError> {
        let response = self
            .client
            .get(self.chart_url(symbol))
            .header("referer", "https://finance.yahoo.com/")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        parse_chart(&body)
    }

    fn transport_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if e.is_connect() {
            FetchError::Transport(format!("connection failed: {e}"))
        } else {
            FetchError::Transport(format!("request failed: {e}"))
        }
    }
}

impl HistorySource for YahooHistorySource {
    fn trailing_year<'a>(&'a self, symbol: &'a str) -> FetchFuture<'a> {
        Box::pin(self.fetch(symbol))
    }
}

/// Extracts daily closes from a chart payload.
///
/// Timestamps are converted to calendar dates in the exchange's own offset
/// (`meta.gmtoffset`). Days without a close are skipped.
pub fn parse_chart(body: &str) -> Result<Vec<DailyClose>, FetchError> {
    let chart: ChartResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(format!("chart payload: {e}")))?;

    if let Some(error) = chart.chart.error {
        return Err(FetchError::Upstream(error.to_string()));
    }

    let result = chart
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or(FetchError::Empty)?;

    let offset_secs = result.meta.and_then(|m| m.gmtoffset).unwrap_or(0);
    let offset = UtcOffset::from_whole_seconds(offset_secs)
        .map_err(|e| FetchError::Malformed(format!("gmtoffset {offset_secs}: {e}")))?;

    let timestamps = result.timestamp.unwrap_or_default();
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    let mut out = Vec::with_capacity(timestamps.len());
    for (ts, close) in timestamps.into_iter().zip(closes) {
        let Some(close) = close else { continue };
        let date = OffsetDateTime::from_unix_timestamp(ts)
            .map_err(|e| FetchError::Malformed(format!("timestamp {ts}: {e}")))?
            .to_offset(offset)
            .date();
        out.push(DailyClose::new(date, close));
    }

    if out.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(out)
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartData,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(d) => write!(f, "{}: {}", self.code, d),
            None => f.write_str(&self.code),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Option<ChartMeta>,
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
