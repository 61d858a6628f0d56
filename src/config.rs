//! Client configuration loaded from the environment.
//!
//! All four connection parameters are required; there are no defaults:
//! - `OKEX_API_SERVER`: REST API base URL (e.g. [`DEFAULT_API_URL`](crate::network::DEFAULT_API_URL))
//! - `OKEX_API_KEY`: API key sent with every private request
//! - `OKEX_SECRET_KEY`: secret used to sign private requests
//! - `OKEX_TIMEOUT_SECS`: per-request timeout in seconds (fractions allowed)

use std::time::Duration;

use crate::api::{ApiError, ApiResult, OkexApi, OkexApiBuilder};

pub const API_SERVER_VAR: &str = "OKEX_API_SERVER";
pub const API_KEY_VAR: &str = "OKEX_API_KEY";
pub const SECRET_KEY_VAR: &str = "OKEX_SECRET_KEY";
pub const TIMEOUT_VAR: &str = "OKEX_TIMEOUT_SECS";

/// Connection parameters of an [`OkexApi`].
#[derive(Clone, PartialEq)]
pub struct OkexConfig {
    pub api_server: String,
    pub api_key: String,
    pub secret_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for OkexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OkexConfig")
            .field("api_server", &self.api_server)
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OkexConfig {
    /// Load the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if a variable is missing, empty or (for
    /// the timeout) not a positive number of seconds.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ApiError::Config(format!("{} is not set", name)))
        };

        let raw_timeout = required(TIMEOUT_VAR)?;
        let timeout = parse_timeout(&raw_timeout)
            .ok_or_else(|| ApiError::Config(format!("{} is not a positive number: '{}'", TIMEOUT_VAR, raw_timeout)))?;

        Ok(Self {
            api_server: required(API_SERVER_VAR)?,
            api_key: required(API_KEY_VAR)?,
            secret_key: required(SECRET_KEY_VAR)?,
            timeout,
        })
    }

    /// A client builder preloaded with this configuration.
    pub fn client_builder(&self) -> OkexApiBuilder {
        OkexApi::builder(
            self.api_server.as_str(),
            self.api_key.as_str(),
            self.secret_key.as_str(),
            self.timeout,
        )
    }

    /// Build a client with the default transport and event sink.
    pub fn build_client(&self) -> ApiResult<OkexApi> {
        self.client_builder().build()
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    let secs: f64 = raw.trim().parse().ok()?;
    if secs > 0.0 {
        Duration::try_from_secs_f64(secs).ok()
    } else {
        None
    }
}
