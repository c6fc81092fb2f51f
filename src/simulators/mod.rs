// src/simulators/mod.rs

pub mod gbm;

pub use gbm::{SimulationError, SimulationStep, StepParams, simulate_step};
