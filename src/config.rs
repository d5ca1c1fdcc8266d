use crate::session::Credentials;
use anyhow::{Context, Result};
use std::{env, fmt::Display, str::FromStr, time::Duration};
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.realo-realestate.com";

/// Runtime settings, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// API base, without trailing slashes
    pub api_url: String,
    pub timeout: Duration,
    pub admin: Credentials,
}

impl Config {
    pub fn load() -> Result<Self> {
        let api_url: String = try_load("REALO_API_URL", DEFAULT_API_URL)?;
        let timeout_secs: u64 = try_load("REALO_TIMEOUT_SECS", "30")?;
        let username: String = try_load("REALO_ADMIN_USER", "admin")?;
        let password: String = try_load("REALO_ADMIN_PASSWORD", "admin")?;

        Self::new(&api_url, Duration::from_secs(timeout_secs), Credentials::new(username, password))
    }

    pub fn new(api_url: &str, timeout: Duration, admin: Credentials) -> Result<Self> {
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        Url::parse(&api_url).with_context(|| format!("Invalid API URL '{api_url}'"))?;
        Ok(Self {
            api_url,
            timeout,
            admin,
        })
    }

    /// Scheme, host and port of the API; root-relative image paths resolve against it
    pub fn api_origin(&self) -> String {
        api_origin(&self.api_url)
    }
}

/// `https://api.example.com/v1/` → `https://api.example.com`
pub fn api_origin(api_url: &str) -> String {
    match Url::parse(api_url) {
        Ok(url) => url.origin().ascii_serialization(),
        Err(e) => {
            warn!("Cannot derive origin from '{}': {}", api_url, e);
            String::new()
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse()
        .map_err(|e| anyhow::anyhow!("Invalid {key} value '{raw}': {e}"))
}
