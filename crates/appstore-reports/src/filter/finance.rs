use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::ValidationError;
use crate::transport::QueryParams;

/// Apple fiscal month, `YYYY-MM`.
const FISCAL_MONTH_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancesReportType {
    Financial,
    FinanceDetail,
}

impl FinancesReportType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Financial => "FINANCIAL",
            Self::FinanceDetail => "FINANCE_DETAIL",
        }
    }
}

impl Display for FinancesReportType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter for `v1/financeReports`. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinancesReportsFilter {
    pub report_date: Option<Date>,
    pub report_type: Option<FinancesReportType>,
    pub region_code: String,
}

impl FinancesReportsFilter {
    /// Starts a `FINANCIAL` report filter.
    pub fn new() -> Self {
        Self {
            report_type: Some(FinancesReportType::Financial),
            ..Self::default()
        }
    }

    pub fn set_report_type(mut self, value: FinancesReportType) -> Self {
        self.report_type = Some(value);
        self
    }

    pub fn type_financial(self) -> Self {
        self.set_report_type(FinancesReportType::Financial)
    }

    pub fn type_finance_detail(self) -> Self {
        self.set_report_type(FinancesReportType::FinanceDetail)
    }

    pub fn set_report_date(mut self, value: Date) -> Self {
        self.report_date = Some(value);
        self
    }

    pub fn set_region_code(mut self, value: impl Into<String>) -> Self {
        self.region_code = value.into();
        self
    }

    pub fn is_valid(&self) -> Result<(), ValidationError> {
        if self.report_type.is_none() {
            return Err(ValidationError::FieldRequired {
                field: "ReportType",
            });
        }
        if self.region_code.trim().is_empty() {
            return Err(ValidationError::FieldRequired {
                field: "RegionCode",
            });
        }
        if self.report_date.is_none() {
            return Err(ValidationError::FieldRequired {
                field: "ReportDate",
            });
        }
        Ok(())
    }

    pub fn to_query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(report_type) = self.report_type {
            query.insert(String::from("filter[reportType]"), report_type.as_str().to_owned());
        }
        query.insert(String::from("filter[regionCode]"), self.region_code.clone());
        if let Some(formatted) = self
            .report_date
            .and_then(|date| date.format(FISCAL_MONTH_FORMAT).ok())
        {
            query.insert(String::from("filter[reportDate]"), formatted);
        }
        query
    }
}
