//! Authenticated request construction and dispatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::auth::TokenStore;
use crate::config::Config;
use crate::error::ClientError;
use crate::http_client::{HttpAuth, HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// Query parameters keyed by name; iteration order is the encoding order.
pub type QueryParams = BTreeMap<String, String>;

pub const ACCEPT: &str = "application/a-gzip";
pub const ACCEPT_ENCODING: &str = "gzip";

/// Composes authenticated requests against the configured base URI.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: Arc<Config>,
    tokens: Arc<TokenStore>,
}

impl RequestBuilder {
    pub fn new(config: Arc<Config>, tokens: Arc<TokenStore>) -> Self {
        Self { config, tokens }
    }

    pub fn is_valid_token(&self) -> bool {
        self.tokens.current().is_valid()
    }

    pub fn build_uri(&self, path: &str, query: &QueryParams) -> String {
        let base = self.config.uri.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let query = encode_query(query);
        if query.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{path}?{query}")
        }
    }

    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &QueryParams,
    ) -> Result<HttpRequest, ClientError> {
        let token = self.tokens.current();
        if !token.is_valid() {
            return Err(ClientError::InvalidToken {
                operation: "RequestBuilder.build_request",
            });
        }

        let request = HttpRequest::new(method, self.build_uri(path, query))
            .with_header("Accept", ACCEPT)
            .with_header("Accept-Encoding", ACCEPT_ENCODING)
            .with_auth(&HttpAuth::BearerToken(token.value.clone()))
            .with_timeout_ms(self.config.timeout_ms);
        Ok(request)
    }
}

/// Percent-encodes `name=value` pairs in key order.
pub fn encode_query(query: &QueryParams) -> String {
    query
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Sends requests built by [`RequestBuilder`] through an [`HttpClient`].
#[derive(Clone)]
pub struct Transport {
    http: Arc<dyn HttpClient>,
    builder: RequestBuilder,
}

impl Transport {
    pub fn new(http: Arc<dyn HttpClient>, builder: RequestBuilder) -> Self {
        Self { http, builder }
    }

    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    pub async fn send_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &QueryParams,
    ) -> Result<HttpResponse, ClientError> {
        let request = self.builder.build_request(method, path, query)?;
        debug!(method = %request.method, url = %request.url, "sending report request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| ClientError::Transport {
                operation: "Transport.send_request",
                source,
            })?;

        debug!(
            status = response.status,
            content_type = response.content_type().unwrap_or_default(),
            "received report response"
        );
        Ok(response)
    }

    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<HttpResponse, ClientError> {
        self.send_request(HttpMethod::Get, path, query).await
    }
}
