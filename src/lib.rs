// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod app;
pub mod calendar;
pub mod config;
pub mod error;
pub mod history;
pub mod rounding;
pub mod routes;
pub mod simulators;
pub mod stocks;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `app` ---
pub use app::{AppState, router};

// --- From `calendar` ---
pub use calendar::{PROJECTION_DAYS, format_date, project_trading_days};

// --- From `config` ---
pub use config::{ConfigError, ServerConfig};

// --- From `error` ---
pub use error::ApiError;

// --- From `history` ---
pub use history::{
    DailyClose, FetchError, HistorySource, OfflineSource, PriceSeries, SeriesOutcome,
    SeriesProvider, YahooHistorySource,
};

// --- From `simulators` ---
pub use simulators::{SimulationError, SimulationStep, StepParams, simulate_step};

// --- From `stocks` ---
pub use stocks::{CompanyProfile, DisplayIdentity, Symbol};
