//! App Store Connect sales and finance reports client.
//!
//! This crate contains:
//! - `.p8` key loading and ES256 token signing
//! - Authenticated request construction and an async HTTP seam
//! - Per-family filter rules for sales reports, plus finance report filters
//! - Content-negotiated response decoding (JSON errors, gzip TSV reports)
//! - Typed report rows with blank-tolerant scalar cells
//!
//! ```text
//! filter ──validate──▶ resource ──query + vendor──▶ transport ──▶ HttpClient
//!                                                      │
//!                       rows / API errors ◀── decoder ◀┘ (Content-Type)
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod reports;
pub mod resource;
pub mod response;
pub mod scalar;
pub mod transport;
pub mod tsv;

pub use auth::{AuthToken, Claims, EcSigningKey, PrivateKeyLoader, TokenBuilder, TokenStore};
pub use client::Client;
pub use config::{Config, TokenConfig, PRODUCTION_URI, TOKEN_AUDIENCE};
pub use error::{ClientError, ConfigError, DecodeError, KeyError, TokenError, ValidationError};
pub use filter::{
    FamilyRules, FinancesReportType, FinancesReportsFilter, ReportFamily, SalesReportFrequency,
    SalesReportSubType, SalesReportType, SalesReportVersion, SalesReportsFilter,
};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
    ResponseBody,
};
pub use reports::{
    FinanceDetailReport, FinancialReport, PreOrdersReport, SalesReport, SubscribersReport,
    SubscriptionsEventsReport, SubscriptionsOffersRedemptionReport, SubscriptionsReport,
};
pub use resource::{FinancesReportsResource, SalesReportsResource};
pub use response::{
    ApiErrorEntry, ApiErrorSource, ContentHandler, ErrorResult, GzipResponseHandler,
    JsonResponseHandler, ReportResponse, ResponseHandler, UnmarshalBody,
};
pub use scalar::{ReportBoolean, ReportDate, ReportFloat, ReportInteger, ReportTimestamp};
pub use transport::{QueryParams, RequestBuilder, Transport};
pub use tsv::TsvDialect;
