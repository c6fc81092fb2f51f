// src/config.rs

//! A centralized place for service settings.
//!
//! Compile-time defaults live in the constants below; `ServerConfig::from_env`
//! lets the environment override them at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

use crate::history::yahoo::DEFAULT_BASE_URL;

// --- Listener ---
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 5000;

// --- Upstream market data ---
// Slow upstream answers are treated like failures and trigger the synthetic series.
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5_000;

// --- Environment variable names ---
pub const ENV_HOST: &str = "STOCKSIM_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_UPSTREAM_URL: &str = "STOCKSIM_UPSTREAM_URL";
pub const ENV_UPSTREAM_TIMEOUT_MS: &str = "STOCKSIM_UPSTREAM_TIMEOUT_MS";
pub const ENV_OFFLINE: &str = "STOCKSIM_OFFLINE";
pub const ENV_SEED: &str = "STOCKSIM_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name}: invalid value '{value}' ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    /// Skip the upstream entirely and always serve synthetic history.
    pub offline: bool,
    /// Seed for the simulation RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_BASE_URL.to_string(),
            upstream_timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
            offline: false,
            seed: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable lookup. Unset or blank variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(v) = get(ENV_HOST) {
            cfg.host = parse(ENV_HOST, &v)?;
        }
        if let Some(v) = get(ENV_PORT) {
            cfg.port = parse(ENV_PORT, &v)?;
        }
        if let Some(v) = get(ENV_UPSTREAM_URL) {
            if !(v.starts_with("http://") || v.starts_with("https://")) {
                return Err(invalid(ENV_UPSTREAM_URL, &v, "expected an http(s) URL"));
            }
            cfg.upstream_url = v;
        }
        if let Some(v) = get(ENV_UPSTREAM_TIMEOUT_MS) {
            let ms: u64 = parse(ENV_UPSTREAM_TIMEOUT_MS, &v)?;
            if ms == 0 {
                return Err(invalid(ENV_UPSTREAM_TIMEOUT_MS, &v, "must be greater than zero"));
            }
            cfg.upstream_timeout = Duration::from_millis(ms);
        }
        if let Some(v) = get(ENV_OFFLINE) {
            cfg.offline = parse_flag(ENV_OFFLINE, &v)?;
        }
        if let Some(v) = get(ENV_SEED) {
            cfg.seed = Some(parse(ENV_SEED, &v)?);
        }

        Ok(cfg)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn invalid(name: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| invalid(name, value, e.to_string()))
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, value, "expected true/false")),
    }
}
