use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use jsonwebtoken::{Algorithm, Header};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;

use super::private_key::PrivateKeyLoader;
use crate::config::Config;
use crate::error::TokenError;

/// Signed bearer credential with its expiry as unix seconds.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AuthToken {
    pub value: String,
    pub expires_at: i64,
}

impl AuthToken {
    pub fn new(value: impl Into<String>, expires_at: i64) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(now_unix())
    }

    pub fn is_not_expired(&self) -> bool {
        self.expires_at > now_unix()
    }

    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expires_at > now && !self.value.is_empty()
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Holds the current token; replacement swaps the whole value.
#[derive(Debug, Default)]
pub struct TokenStore {
    current: RwLock<Arc<AuthToken>>,
}

impl TokenStore {
    pub fn new(token: AuthToken) -> Self {
        Self {
            current: RwLock::new(Arc::new(token)),
        }
    }

    pub fn current(&self) -> Arc<AuthToken> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn replace(&self, token: AuthToken) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(token);
    }
}

/// Registered JWT claims sent to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub aud: String,
    pub iss: String,
    pub exp: i64,
}

/// Builds ES256-signed tokens from the configured key.
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    config: Arc<Config>,
    loader: PrivateKeyLoader,
}

impl TokenBuilder {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            loader: PrivateKeyLoader,
        }
    }

    pub fn build_payload(&self, now: i64) -> Result<Claims, TokenError> {
        let exp = now
            .checked_add(self.config.token.ttl_secs)
            .ok_or_else(|| {
                TokenError::Signing(format!(
                    "token expiry overflows: ttl {}s",
                    self.config.token.ttl_secs
                ))
            })?;
        Ok(Claims {
            aud: self.config.token.audience.clone(),
            iss: self.config.issuer_id.clone(),
            exp,
        })
    }

    pub fn build_header(&self) -> Result<Header, TokenError> {
        let algorithm = Algorithm::from_str(&self.config.token.algo)
            .map_err(|err| TokenError::Signing(format!("unsupported algorithm: {err}")))?;
        if algorithm != Algorithm::ES256 {
            return Err(TokenError::Signing(format!(
                "unsupported algorithm: {}",
                self.config.token.algo
            )));
        }

        let mut header = Header::new(algorithm);
        header.typ = Some(self.config.token.typ.clone());
        header.kid = Some(self.config.key_id.clone());
        Ok(header)
    }

    pub fn build_auth_token(&self) -> Result<AuthToken, TokenError> {
        let claims = self.build_payload(now_unix())?;
        let header = self.build_header()?;
        let key = self.loader.load(&self.config.private_key)?;

        let value = jsonwebtoken::encode(&header, &claims, &key.encoding_key())
            .map_err(|err| TokenError::Signing(err.to_string()))?;

        info!(
            key_id = %self.config.key_id,
            expires_at = claims.exp,
            "signed App Store Connect token"
        );
        Ok(AuthToken::new(value, claims.exp))
    }
}

fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
