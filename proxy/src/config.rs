//! Startup configuration, read once from the environment.

use anyhow::{Context, Result};
use reqwest::Url;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Immutable process configuration.
///
/// Built once in `main` and shared read-only with every request.
#[derive(Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub api_url: Url,
    pub api_key: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same parsing as [`Config::from_env`], from an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("SERVER_HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .with_context(|| format!("SERVER_HOST is not a valid IP address: {raw}"))?,
            None => DEFAULT_HOST.parse()?,
        };

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let raw_url = lookup("CHAT_GPT_API_URL")
            .ok_or_else(|| anyhow::anyhow!("CHAT_GPT_API_URL environment variable not set"))?;
        let api_url = Url::parse(&raw_url)
            .with_context(|| format!("CHAT_GPT_API_URL is not a valid URL: {raw_url}"))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "CHAT_GPT_API_URL must be an http(s) URL, got scheme '{}'",
                api_url.scheme()
            );
        }

        let api_key = lookup("API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow::anyhow!("API_KEY environment variable not set"))?;

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .with_context(|| {
                    format!("UPSTREAM_TIMEOUT_SECS must be a positive number of seconds: {raw}")
                })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            api_url,
            api_key,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &"<redacted>")
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}
