use crate::error::{GatewayError, Result};
use std::fmt;
use std::time::Duration;

pub const ENV_MERCHANT_CODE: &str = "IPAY88_MERCHANT_CODE";
pub const ENV_MERCHANT_KEY: &str = "IPAY88_MERCHANT_KEY";
pub const ENV_TIMEOUT_SECS: &str = "IPAY88_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The merchant key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(***)")
    }
}

/// Seller credentials and transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub seller_identifier: Option<String>,
    pub shared_secret: Option<SharedSecret>,
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            seller_identifier: None,
            shared_secret: None,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    pub fn new(seller_identifier: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            seller_identifier: Some(seller_identifier.into()),
            shared_secret: Some(SharedSecret::new(shared_secret)),
            ..Self::default()
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Reads the configuration from the `IPAY88_*` environment variables.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    GatewayError::InvalidParameters(format!(
                        "{ENV_TIMEOUT_SECS} must be a number of seconds, \"{raw}\" given"
                    ))
                })?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            seller_identifier: lookup(ENV_MERCHANT_CODE).filter(|v| !v.is_empty()),
            shared_secret: lookup(ENV_MERCHANT_KEY)
                .filter(|v| !v.is_empty())
                .map(SharedSecret::new),
            request_timeout,
        })
    }

    pub fn shared_secret(&self) -> Option<&str> {
        self.shared_secret.as_ref().map(SharedSecret::expose)
    }
}
