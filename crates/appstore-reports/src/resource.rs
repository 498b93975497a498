//! Report endpoints: filter validation, vendor scoping, typed decoding.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ClientError, ValidationError};
use crate::filter::{FinancesReportType, FinancesReportsFilter, ReportFamily, SalesReportsFilter};
use crate::http_client::HttpResponse;
use crate::reports::{
    FinanceDetailReport, FinancialReport, PreOrdersReport, SalesReport, SubscribersReport,
    SubscriptionsEventsReport, SubscriptionsOffersRedemptionReport, SubscriptionsReport,
};
use crate::response::{decode_report_response, ReportResponse};
use crate::transport::{QueryParams, Transport};

pub const SALES_REPORTS_PATH: &str = "v1/salesReports";
pub const FINANCE_REPORTS_PATH: &str = "v1/financeReports";

/// Transport and vendor scope shared by every report resource.
#[derive(Clone)]
struct ReportEndpoint {
    transport: Transport,
    config: Arc<Config>,
}

impl ReportEndpoint {
    fn with_vendor(&self, mut query: QueryParams) -> QueryParams {
        query.insert(
            String::from("filter[vendorNumber]"),
            self.config.vendor_no.clone(),
        );
        query
    }

    async fn get(&self, path: &str, query: QueryParams) -> Result<HttpResponse, ClientError> {
        self.transport.get(path, &self.with_vendor(query)).await
    }
}

fn invalid_filter(operation: &'static str) -> impl FnOnce(ValidationError) -> ClientError {
    move |source| ClientError::InvalidFilter { operation, source }
}

/// Reports served by `v1/salesReports`.
#[derive(Clone)]
pub struct SalesReportsResource {
    endpoint: ReportEndpoint,
}

impl SalesReportsResource {
    pub fn new(transport: Transport, config: Arc<Config>) -> Self {
        Self {
            endpoint: ReportEndpoint { transport, config },
        }
    }

    /// Validates `filter` against its own rules and returns the raw response.
    pub async fn get_reports(&self, filter: &SalesReportsFilter) -> Result<HttpResponse, ClientError> {
        filter
            .is_valid()
            .map_err(invalid_filter("SalesReportsResource.get_reports"))?;
        self.endpoint
            .get(SALES_REPORTS_PATH, filter.to_query_params())
            .await
    }

    async fn get_family_reports<R: DeserializeOwned>(
        &self,
        operation: &'static str,
        family: ReportFamily,
        filter: &SalesReportsFilter,
    ) -> Result<ReportResponse<R>, ClientError> {
        filter.validate_as(family).map_err(invalid_filter(operation))?;
        let response = self
            .endpoint
            .get(SALES_REPORTS_PATH, filter.to_query_params())
            .await?;
        decode_report_response(operation, response)
    }

    pub async fn get_sales_reports(
        &self,
        filter: &SalesReportsFilter,
    ) -> Result<ReportResponse<SalesReport>, ClientError> {
        self.get_family_reports("SalesReportsResource.get_sales_reports", ReportFamily::Sales, filter)
            .await
    }

    pub async fn get_subscriptions_reports(
        &self,
        filter: &SalesReportsFilter,
    ) -> Result<ReportResponse<SubscriptionsReport>, ClientError> {
        self.get_family_reports(
            "SalesReportsResource.get_subscriptions_reports",
            ReportFamily::Subscriptions,
            filter,
        )
        .await
    }

    pub async fn get_subscriptions_events_reports(
        &self,
        filter: &SalesReportsFilter,
    ) -> Result<ReportResponse<SubscriptionsEventsReport>, ClientError> {
        self.get_family_reports(
            "SalesReportsResource.get_subscriptions_events_reports",
            ReportFamily::SubscriptionEvents,
            filter,
        )
        .await
    }

    pub async fn get_subscribers_reports(
        &self,
        filter: &SalesReportsFilter,
    ) -> Result<ReportResponse<SubscribersReport>, ClientError> {
        self.get_family_reports(
            "SalesReportsResource.get_subscribers_reports",
            ReportFamily::Subscribers,
            filter,
        )
        .await
    }

    pub async fn get_pre_orders_reports(
        &self,
        filter: &SalesReportsFilter,
    ) -> Result<ReportResponse<PreOrdersReport>, ClientError> {
        self.get_family_reports(
            "SalesReportsResource.get_pre_orders_reports",
            ReportFamily::PreOrders,
            filter,
        )
        .await
    }

    pub async fn get_subscriptions_offers_redemption_reports(
        &self,
        filter: &SalesReportsFilter,
    ) -> Result<ReportResponse<SubscriptionsOffersRedemptionReport>, ClientError> {
        self.get_family_reports(
            "SalesReportsResource.get_subscriptions_offers_redemption_reports",
            ReportFamily::SubscriptionOfferCodeRedemption,
            filter,
        )
        .await
    }
}

/// Reports served by `v1/financeReports`.
#[derive(Clone)]
pub struct FinancesReportsResource {
    endpoint: ReportEndpoint,
}

impl FinancesReportsResource {
    pub fn new(transport: Transport, config: Arc<Config>) -> Self {
        Self {
            endpoint: ReportEndpoint { transport, config },
        }
    }

    pub async fn get_reports(&self, filter: &FinancesReportsFilter) -> Result<HttpResponse, ClientError> {
        filter
            .is_valid()
            .map_err(invalid_filter("FinancesReportsResource.get_reports"))?;
        self.endpoint
            .get(FINANCE_REPORTS_PATH, filter.to_query_params())
            .await
    }

    async fn get_typed_reports<R: DeserializeOwned>(
        &self,
        operation: &'static str,
        report_type: FinancesReportType,
        filter: &FinancesReportsFilter,
    ) -> Result<ReportResponse<R>, ClientError> {
        filter.is_valid().map_err(invalid_filter(operation))?;
        if filter.report_type != Some(report_type) {
            return Err(ClientError::InvalidFilter {
                operation,
                source: ValidationError::FieldNotAllowed {
                    field: "ReportType",
                    family: report_type.as_str(),
                },
            });
        }
        let response = self
            .endpoint
            .get(FINANCE_REPORTS_PATH, filter.to_query_params())
            .await?;
        decode_report_response(operation, response)
    }

    pub async fn get_financial_reports(
        &self,
        filter: &FinancesReportsFilter,
    ) -> Result<ReportResponse<FinancialReport>, ClientError> {
        self.get_typed_reports(
            "FinancesReportsResource.get_financial_reports",
            FinancesReportType::Financial,
            filter,
        )
        .await
    }

    pub async fn get_finance_detail_reports(
        &self,
        filter: &FinancesReportsFilter,
    ) -> Result<ReportResponse<FinanceDetailReport>, ClientError> {
        self.get_typed_reports(
            "FinancesReportsResource.get_finance_detail_reports",
            FinancesReportType::FinanceDetail,
            filter,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::io::Write;
    use std::pin::Pin;
    use std::sync::Mutex;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use time::macros::date;

    use super::*;
    use crate::auth::{AuthToken, TokenStore};
    use crate::http_client::{HttpClient, HttpError, HttpRequest};
    use crate::transport::RequestBuilder;

    struct CannedHttpClient {
        requests: Mutex<Vec<HttpRequest>>,
        status: u16,
        content_type: &'static str,
        body: Vec<u8>,
    }

    impl CannedHttpClient {
        fn gzip_tsv(table: &str) -> Self {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder
                .write_all(table.as_bytes())
                .expect("in-memory write");
            Self {
                requests: Mutex::new(Vec::new()),
                status: 200,
                content_type: "application/a-gzip",
                body: encoder.finish().expect("in-memory finish"),
            }
        }

        fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .clone()
        }
    }

    impl HttpClient for CannedHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            let response = HttpResponse::new(self.status)
                .with_header("Content-Type", self.content_type)
                .with_body(self.body.clone());
            Box::pin(async move { Ok(response) })
        }
    }

    fn transport(http: Arc<CannedHttpClient>) -> (Transport, Arc<Config>) {
        let config = Arc::new(
            Config::new("issuer", "key", "12345678", "pk").with_uri("https://example.test"),
        );
        let expires_at = time::OffsetDateTime::now_utc().unix_timestamp() + 600;
        let tokens = Arc::new(TokenStore::new(AuthToken::new("token", expires_at)));
        let builder = RequestBuilder::new(config.clone(), tokens);
        (Transport::new(http, builder), config)
    }

    #[tokio::test]
    async fn sales_helper_decodes_rows_and_scopes_vendor() {
        let http = Arc::new(CannedHttpClient::gzip_tsv(
            "Provider\tSKU\tUnits\nAPPLE\tfoo.bar.baz\t12\nTotal_Rows\t1\n",
        ));
        let (transport, config) = transport(http.clone());
        let resource = SalesReportsResource::new(transport, config);

        let filter = SalesReportsFilter::sales()
            .sub_type_summary()
            .daily()
            .version_1_0()
            .set_report_date(date!(2020 - 10 - 05));
        let result = resource
            .get_sales_reports(&filter)
            .await
            .expect("report must decode");

        assert!(result.is_success());
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].sku, "foo.bar.baz");

        let requests = http.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.starts_with("https://example.test/v1/salesReports?"));
        assert!(requests[0].url.contains("filter%5BvendorNumber%5D=12345678"));
        assert!(requests[0].url.contains("filter%5BreportDate%5D=2020-10-05"));
    }

    #[tokio::test]
    async fn family_helper_rejects_foreign_filter_without_request() {
        let http = Arc::new(CannedHttpClient::gzip_tsv(""));
        let (transport, config) = transport(http.clone());
        let resource = SalesReportsResource::new(transport, config);

        let filter = SalesReportsFilter::sales()
            .sub_type_summary()
            .daily()
            .version_1_0();
        let err = resource
            .get_subscribers_reports(&filter)
            .await
            .expect_err("sales filter is not a subscribers filter");

        assert_eq!(
            err.to_string(),
            "SalesReportsResource.get_subscribers_reports invalid filter: ReportType is not valid"
        );
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn finance_helper_requires_matching_report_type() {
        let http = Arc::new(CannedHttpClient::gzip_tsv(""));
        let (transport, config) = transport(http.clone());
        let resource = FinancesReportsResource::new(transport, config);

        let filter = FinancesReportsFilter::new()
            .set_region_code("US")
            .set_report_date(date!(2020 - 05 - 04));
        let err = resource
            .get_finance_detail_reports(&filter)
            .await
            .expect_err("financial filter on detail endpoint");

        assert_eq!(
            err.to_string(),
            "FinancesReportsResource.get_finance_detail_reports invalid filter: ReportType is not valid"
        );
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn raw_get_reports_returns_unread_response() {
        let http = Arc::new(CannedHttpClient::gzip_tsv("Start Date\n05/04/2020\n"));
        let (transport, config) = transport(http.clone());
        let resource = FinancesReportsResource::new(transport, config);

        let filter = FinancesReportsFilter::new()
            .set_region_code("US")
            .set_report_date(date!(2020 - 05 - 04));
        let response = resource.get_reports(&filter).await.expect("raw response");

        assert_eq!(response.status, 200);
        assert!(!response.body.is_consumed());
        let url = &http.recorded_requests()[0].url;
        assert!(url.contains("filter%5BreportDate%5D=2020-05"));
        assert!(url.contains("filter%5BregionCode%5D=US"));
    }
}
