use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use anyhow::{Result, anyhow};
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "8000";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

pub struct Config {
    pub port: u16,
    pub redis_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("PORT", DEFAULT_PORT)?,
            redis_url: match read_secret("REDIS_URL") {
                Some(url) => url,
                None => try_load("REDIS_URL", DEFAULT_REDIS_URL)?,
            },
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_value(key, &value)
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: Display,
{
    value.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Environment misconfigured, invalid {key} value {value:?}: {e}")
    })
}

fn read_secret(secret_name: &str) -> Option<String> {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|_| {
            info!("No secret file for {secret_name}, falling back to environment");
        })
        .ok()
        .filter(|s| !s.is_empty())
}
