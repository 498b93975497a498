//! Client configuration.
//!
//! A [`Config`] is built once, validated, and then shared read-only by the
//! client, its token builder and its transport.

use std::fmt::{Debug, Formatter};

use crate::error::ConfigError;

/// Production App Store Connect API base URI.
pub const PRODUCTION_URI: &str = "https://api.appstoreconnect.apple.com";
/// JWT audience expected by the API.
pub const TOKEN_AUDIENCE: &str = "appstoreconnect-v1";
/// Token lifetime in seconds.
pub const TOKEN_TTL_SECS: i64 = 600;
/// The API rejects tokens living longer than 20 minutes.
pub const MAX_TOKEN_TTL_SECS: i64 = 1200;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_ISSUER_ID: &str = "APPSTORE_ISSUER_ID";
pub const ENV_KEY_ID: &str = "APPSTORE_KEY_ID";
pub const ENV_VENDOR_NO: &str = "APPSTORE_VENDOR_NO";
pub const ENV_PRIVATE_KEY: &str = "APPSTORE_PRIVATE_KEY";
pub const ENV_API_URI: &str = "APPSTORE_API_URI";
pub const ENV_TOKEN_TTL: &str = "APPSTORE_TOKEN_TTL";

/// JWT header and claim settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    pub audience: String,
    pub typ: String,
    pub algo: String,
    pub ttl_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            audience: String::from(TOKEN_AUDIENCE),
            typ: String::from("JWT"),
            algo: String::from("ES256"),
            ttl_secs: TOKEN_TTL_SECS,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub uri: String,
    pub vendor_no: String,
    pub issuer_id: String,
    pub key_id: String,
    /// Filesystem path to the `.p8` key, or the PEM content itself.
    pub private_key: String,
    pub token: TokenConfig,
    pub timeout_ms: u64,
}

impl Config {
    pub fn new(
        issuer_id: impl Into<String>,
        key_id: impl Into<String>,
        vendor_no: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            uri: String::from(PRODUCTION_URI),
            vendor_no: vendor_no.into(),
            issuer_id: issuer_id.into(),
            key_id: key_id.into(),
            private_key: private_key.into(),
            token: TokenConfig::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Reads credentials from `APPSTORE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar { name })
        };

        let mut config = Self::new(
            required(ENV_ISSUER_ID)?,
            required(ENV_KEY_ID)?,
            required(ENV_VENDOR_NO)?,
            required(ENV_PRIVATE_KEY)?,
        );

        if let Some(uri) = lookup(ENV_API_URI).filter(|value| !value.trim().is_empty()) {
            config.uri = uri;
        }

        if let Some(raw) = lookup(ENV_TOKEN_TTL) {
            let ttl = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or(ConfigError::InvalidVar {
                    name: ENV_TOKEN_TTL,
                    value: raw.clone(),
                })?;
            config.token.ttl_secs = ttl;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn with_token_ttl(mut self, ttl_secs: i64) -> Self {
        self.token.ttl_secs = ttl_secs;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("uri", &self.uri),
            ("vendor_no", &self.vendor_no),
            ("issuer_id", &self.issuer_id),
            ("key_id", &self.key_id),
            ("private_key", &self.private_key),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }

        let ttl = self.token.ttl_secs;
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&ttl) {
            return Err(ConfigError::OutOfRange {
                field: "token.ttl_secs",
                value: ttl,
                min: 1,
                max: MAX_TOKEN_TTL_SECS,
            });
        }
        Ok(())
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("uri", &self.uri)
            .field("vendor_no", &self.vendor_no)
            .field("issuer_id", &self.issuer_id)
            .field("key_id", &self.key_id)
            .field("private_key", &"<redacted>")
            .field("token", &self.token)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
