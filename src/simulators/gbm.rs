// src/simulators/gbm.rs

use crate::rounding::{round_price, round_to};
use rand::Rng;
use rand::distributions::Distribution;
use rand_distr::StandardNormal;
use serde::Serialize;
use thiserror::Error;

/// One trading day as a fraction of a trading year.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
pub const DEFAULT_DRIFT: f64 = 0.1;
pub const DEFAULT_VOLATILITY: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("{0}")]
    InvalidInput(String),
}

impl SimulationError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Validated inputs for one GBM step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    current_price: f64,
    drift: f64,
    volatility: f64,
}

impl StepParams {
    /// `drift` and `volatility` take the annualised defaults when `None`.
    pub fn new(
        current_price: f64,
        drift: Option<f64>,
        volatility: Option<f64>,
    ) -> Result<Self, SimulationError> {
        let drift = drift.unwrap_or(DEFAULT_DRIFT);
        let volatility = volatility.unwrap_or(DEFAULT_VOLATILITY);

        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(SimulationError::invalid(format!(
                "current_price must be a positive number, got {current_price}"
            )));
        }
        if !drift.is_finite() {
            return Err(SimulationError::invalid("mu must be a finite number"));
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(SimulationError::invalid(format!(
                "sigma must be a non-negative number, got {volatility}"
            )));
        }

        Ok(Self {
            current_price,
            drift,
            volatility,
        })
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }
    pub fn drift(&self) -> f64 {
        self.drift
    }
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

/// Result of a single simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationStep {
    /// Next close, rounded to the cent.
    pub new_price: f64,
    /// The diffusion term `sigma * sqrt(dt) * Z`, rounded to 4 places.
    pub shock: f64,
}

/// Advances `params.current_price` by one trading day of geometric Brownian motion.
///
/// `S' = S * exp((mu - sigma^2/2) dt + sigma sqrt(dt) Z)` with `dt = 1/252`.
/// A zero volatility step is deterministic and draws nothing from `rng`.
/// Inputs that push the price past `f64` range are rejected, not reported as `inf`.
pub fn simulate_step<R: Rng + ?Sized>(
    params: &StepParams,
    rng: &mut R,
) -> Result<SimulationStep, SimulationError> {
    let dt = 1.0 / TRADING_DAYS_PER_YEAR;
    let sigma = params.volatility;

    let shock = if sigma == 0.0 {
        0.0
    } else {
        let z: f64 = StandardNormal.sample(rng);
        sigma * dt.sqrt() * z
    };
    // Ito correction keeps E[S'] = S * exp(mu dt).
    let new_price = params.current_price * ((params.drift - 0.5 * sigma.powi(2)) * dt + shock).exp();
    if !new_price.is_finite() || !shock.is_finite() {
        return Err(SimulationError::invalid(format!(
            "simulation overflowed for current_price {}, mu {}, sigma {}",
            params.current_price, params.drift, params.volatility
        )));
    }

    Ok(SimulationStep {
        new_price: round_price(new_price),
        shock: round_to(shock, 4),
    })
}
