use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::AppState;
use crate::calendar::{PROJECTION_DAYS, format_dates, project_trading_days};
use crate::error::ApiError;
use crate::stocks::display_identity;

#[derive(Debug, Serialize)]
pub struct HistoryPayload {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct StockResponse {
    pub symbol: String,
    pub name: String,
    pub color: String,
    pub history: HistoryPayload,
    pub projection_dates: Vec<String>,
    pub is_real_data: bool,
}

/// History (real or synthetic) plus the next year of trading days for `symbol`.
pub async fn stock_handler(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<StockResponse>, ApiError> {
    let today = state.today();
    let outcome = state.provider.get_series(&symbol, today).await;
    let series = outcome.series();

    let history = HistoryPayload {
        dates: format_dates(series.dates())?,
        prices: series.prices().to_vec(),
    };
    let projection_dates = format_dates(&project_trading_days(today, PROJECTION_DAYS))?;
    let identity = display_identity(&symbol);

    Ok(Json(StockResponse {
        name: identity.name,
        color: identity.color,
        history,
        projection_dates,
        is_real_data: outcome.is_real(),
        symbol,
    }))
}
