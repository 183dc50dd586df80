use std::{env, time::Duration};

use anyhow::{Context, Result, bail};
use derive_getters::Getters;
use reqwest::Client;

use crate::api::{nbu, privat};

/// Runtime settings read from the environment (a `.env` file is honoured by the binary).
#[derive(Clone, Debug, Getters)]
pub struct Config {
    nbu_base_url: String,
    privat_base_url: String,
    request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nbu_base_url: nbu::BASE_URL.to_string(),
            privat_base_url: privat::BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let request_timeout = match lookup("EXCHANGE_REQUEST_TIMEOUT_SECS") {
            Some(secs) => Some(parse_timeout(&secs)?),
            None => None,
        };

        Ok(Self {
            nbu_base_url: lookup("NBU_BASE_URL").unwrap_or(defaults.nbu_base_url),
            privat_base_url: lookup("PRIVAT_BASE_URL").unwrap_or(defaults.privat_base_url),
            request_timeout,
        })
    }

    pub fn http_client(&self) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().with_context(|| "Failed to create HTTP client")
    }
}

/// Whole seconds, at least one. A zero timeout would fail every request.
fn parse_timeout(secs: &str) -> Result<Duration> {
    let value = secs
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse EXCHANGE_REQUEST_TIMEOUT_SECS '{}'", secs))?;

    if value == 0 {
        bail!("EXCHANGE_REQUEST_TIMEOUT_SECS must be at least 1, got 0");
    }

    Ok(Duration::from_secs(value))
}
