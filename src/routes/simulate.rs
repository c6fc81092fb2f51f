use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::{Map, Value};

use crate::AppState;
use crate::error::ApiError;
use crate::simulators::{SimulationStep, StepParams, simulate_step};

/// Body of `POST /simulate-next-day`.
///
/// Numbers may arrive as JSON numbers or numeric strings. `mu` and `sigma`
/// are optional; `null` counts as absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulateRequest {
    pub current_price: f64,
    pub mu: Option<f64>,
    pub sigma: Option<f64>,
}

impl SimulateRequest {
    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ApiError::InvalidInput(format!("request body must be JSON: {e}")))?;
        let Value::Object(fields) = value else {
            return Err(ApiError::InvalidInput(
                "request body must be a JSON object".into(),
            ));
        };

        let current_price = number_field(&fields, "current_price")?
            .ok_or_else(|| ApiError::InvalidInput("missing field 'current_price'".into()))?;
        Ok(Self {
            current_price,
            mu: number_field(&fields, "mu")?,
            sigma: number_field(&fields, "sigma")?,
        })
    }
}

fn number_field(fields: &Map<String, Value>, name: &str) -> Result<Option<f64>, ApiError> {
    let not_a_number = || ApiError::InvalidInput(format!("field '{name}' must be a number"));
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(not_a_number),
        Some(Value::String(s)) => s.trim().parse::<f64>().map(Some).map_err(|_| not_a_number()),
        Some(_) => Err(not_a_number()),
    }
}

/// One GBM day from `current_price`.
pub async fn simulate_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SimulationStep>, ApiError> {
    let req = SimulateRequest::from_json(&body)?;
    let params = StepParams::new(req.current_price, req.mu, req.sigma)?;
    let step = {
        let mut rng = state.rng.lock();
        simulate_step(&params, &mut *rng)?
    };
    tracing::debug!(current_price = req.current_price, new_price = step.new_price, "simulated day");
    Ok(Json(step))
}
