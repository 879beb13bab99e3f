//! Settings read from the environment at startup.

use eyre::{eyre, Result, WrapErr};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Seconds a rendered page may be reused before it is fetched again.
pub const DEFAULT_REVALIDATE_SECS: u64 = 300;
/// Upper bound on a single call to the product API.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the shopping API, e.g. `https://shop.example.com/`.
    pub api_base: Url,
    pub web_host: String,
    pub web_port: u16,
    pub fetch_timeout: Duration,
    /// Freshness window advertised to caches in front of the page.
    pub revalidate: Duration,
}

impl Config {
    /// Loads the config from process environment variables.
    ///
    /// `PRODUCT_API_BASE` is required. `WEB_HOST`, `WEB_PORT`,
    /// `FETCH_TIMEOUT_SECS` and `REVALIDATE_SECS` have defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the config through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base = lookup("PRODUCT_API_BASE")
            .ok_or_else(|| eyre!("PRODUCT_API_BASE environment variable is required"))?;
        let api_base = Url::parse(&api_base)
            .wrap_err_with(|| format!("PRODUCT_API_BASE `{api_base}` is not a URL"))?;

        Ok(Self {
            api_base,
            web_host: lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port: parse_or(&lookup, "WEB_PORT", 3000)?,
            fetch_timeout: Duration::from_secs(parse_or(
                &lookup,
                "FETCH_TIMEOUT_SECS",
                DEFAULT_FETCH_TIMEOUT_SECS,
            )?),
            revalidate: Duration::from_secs(parse_or(
                &lookup,
                "REVALIDATE_SECS",
                DEFAULT_REVALIDATE_SECS,
            )?),
        })
    }

    /// Address the server listens on.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("{key} must be a number, got `{value}`")),
        None => Ok(default),
    }
}
