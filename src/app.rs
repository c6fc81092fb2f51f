// src/app.rs

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::{Date, OffsetDateTime};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::history::{FetchError, HistorySource, OfflineSource, SeriesProvider, YahooHistorySource};
use crate::routes::{health::health_handler, simulate::simulate_handler, stock::stock_handler};

/// Shared, read-mostly state handed to every handler.
pub struct AppState {
    pub provider: SeriesProvider,
    /// Source of `Z` for the GBM step.
    pub rng: Mutex<StdRng>,
    /// "Today" for history and projections.
    pub clock: fn() -> Date,
}

pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

impl AppState {
    pub fn new(provider: SeriesProvider, rng: StdRng) -> Self {
        Self {
            provider,
            rng: Mutex::new(rng),
            clock: today_utc,
        }
    }

    /// Fails only if the upstream HTTP client cannot be built.
    pub fn from_config(cfg: &ServerConfig) -> Result<Self, FetchError> {
        let source: Arc<dyn HistorySource> = if cfg.offline {
            Arc::new(OfflineSource)
        } else {
            Arc::new(YahooHistorySource::new(
                cfg.upstream_url.clone(),
                cfg.upstream_timeout,
            )?)
        };
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::new(SeriesProvider::new(source, cfg.upstream_timeout), rng))
    }

    pub fn with_clock(mut self, clock: fn() -> Date) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> Date {
        (self.clock)()
    }
}

/// Panics become a JSON 500 instead of a dropped connection.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(format!("internal error: {detail}")).into_response()
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/", get(health_handler))
        .route("/stock/:symbol", get(stock_handler))
        .route("/simulate-next-day", post(simulate_handler))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
