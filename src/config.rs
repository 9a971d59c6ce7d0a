use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub storage_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_base_url: get_env("API_BASE_URL")?,
            request_timeout_secs: get_env_parse_or("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            storage_dir: env::var("STORAGE_DIR").unwrap_or_else(|_| "./.recruitment-client".to_string()),
        })
    }

    /// Config for a known base URL, everything else defaulted. Test and
    /// embedding entry point; `from_env` stays the binary's path.
    pub fn for_base_url(api_base_url: impl Into<String>, storage_dir: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            storage_dir: storage_dir.into(),
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
    }
}
