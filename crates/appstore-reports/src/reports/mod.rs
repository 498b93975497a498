//! Typed report rows.
//!
//! Fields map to report columns by exact header name and serialize with
//! snake_case keys. Columns missing from a report decode to zero values.

mod finance;
mod sales;

pub use finance::{FinanceDetailReport, FinancialReport};
pub use sales::{
    PreOrdersReport, SalesReport, SubscribersReport, SubscriptionsEventsReport,
    SubscriptionsOffersRedemptionReport, SubscriptionsReport,
};
