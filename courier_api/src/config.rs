use std::{env, net::SocketAddr, str::FromStr};

use anyhow::Context;
use courier_optimizer::solver::optimization_service::DEFAULT_MAX_LOCATIONS;
use tracing::Level;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub max_locations: usize,
    /// Fixes the planner seed for every request that does not bring its own.
    pub seed: Option<u64>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(ApiConfig {
            bind_address: match parse_var(&lookup, "COURIER_API_ADDR")? {
                Some(address) => address,
                None => DEFAULT_BIND_ADDRESS.parse()?,
            },
            log_level: parse_var(&lookup, "COURIER_LOG_LEVEL")?.unwrap_or(Level::INFO),
            max_locations: parse_var(&lookup, "COURIER_MAX_LOCATIONS")?
                .unwrap_or(DEFAULT_MAX_LOCATIONS),
            seed: parse_var(&lookup, "COURIER_SEED")?,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {value:?}"))
        })
        .transpose()
}
