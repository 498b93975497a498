use thiserror::Error;

use crate::http_client::HttpError;

/// Filter validation errors raised before any request leaves the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    FieldRequired { field: &'static str },
    #[error("{field} is not valid")]
    FieldNotAllowed {
        field: &'static str,
        family: &'static str,
    },
}

impl ValidationError {
    pub const fn field(&self) -> &'static str {
        match self {
            Self::FieldRequired { field } | Self::FieldNotAllowed { field, .. } => field,
        }
    }
}

/// Private key loading failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("failed to read private key file '{path}': {message}")]
    Io { path: String, message: String },
    #[error("private key must be a valid .p8 PEM document")]
    InvalidPemFormat,
    #[error("private key is not a valid PKCS8 document: {0}")]
    Pkcs8Parse(String),
    #[error("private key must be an EC P-256 key, found {0}")]
    UnsupportedKeyType(String),
}

/// Token signing failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("TokenBuilder.load_key: {0}")]
    Key(#[from] KeyError),
    #[error("TokenBuilder.sign: {0}")]
    Signing(String),
}

/// Response payload decoding failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body was already consumed")]
    BodyConsumed,
    #[error("failed to read response body: {0}")]
    Io(String),
    #[error("malformed gzip stream: {0}")]
    Gzip(String),
    #[error("malformed tsv payload: {0}")]
    Tsv(String),
    #[error("cannot parse '{value}' as {kind}")]
    Scalar { kind: &'static str, value: String },
    #[error("malformed json payload: {0}")]
    Json(String),
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable '{name}' is required")]
    MissingVar { name: &'static str },
    #[error("environment variable '{name}' has invalid value '{value}'")]
    InvalidVar { name: &'static str, value: String },
    #[error("config field '{field}' cannot be empty")]
    EmptyField { field: &'static str },
    #[error("config field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Top-level error type for client operations.
///
/// Each variant names the operation that produced it so that the rendered
/// message reads as a call chain, e.g.
/// `SalesReportsResource.get_reports invalid filter: Frequency is required`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{operation}: {source}")]
    Token {
        operation: &'static str,
        #[source]
        source: TokenError,
    },

    #[error("{operation} invalid filter: {source}")]
    InvalidFilter {
        operation: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("{operation} invalid token: token is empty or expired")]
    InvalidToken { operation: &'static str },

    #[error("{operation} transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: HttpError,
    },

    #[error("{operation} decode error: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: DecodeError,
    },

    #[error("{detail}")]
    Api { status: u16, detail: String },
}

impl ClientError {
    pub fn decode(operation: &'static str, source: DecodeError) -> Self {
        Self::Decode { operation, source }
    }

    /// Returns `true` when the failure happened before any network call.
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Token { .. } | Self::InvalidFilter { .. } | Self::InvalidToken { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        let required = ValidationError::FieldRequired {
            field: "ReportType",
        };
        assert_eq!(required.to_string(), "ReportType is required");

        let not_allowed = ValidationError::FieldNotAllowed {
            field: "ReportSubType",
            family: "sales",
        };
        assert_eq!(not_allowed.to_string(), "ReportSubType is not valid");
        assert_eq!(not_allowed.field(), "ReportSubType");
    }

    #[test]
    fn client_error_carries_operation_prefix() {
        let error = ClientError::InvalidFilter {
            operation: "FinancesReportsResource.get_reports",
            source: ValidationError::FieldRequired {
                field: "RegionCode",
            },
        };
        assert_eq!(
            error.to_string(),
            "FinancesReportsResource.get_reports invalid filter: RegionCode is required"
        );
        assert!(error.is_local());
    }
}
