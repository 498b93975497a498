//! Report filters and the per-family rule table.
//!
//! | Family | Type | Sub-type | Frequency | Version |
//! |--------|------|----------|-----------|---------|
//! | Sales | `SALES` | `SUMMARY` | any | `1_0`, `1_1` |
//! | Subscriptions | `SUBSCRIPTION` | `SUMMARY` | `DAILY` | `1_2`, `1_3` |
//! | Subscription events | `SUBSCRIPTION_EVENT` | `SUMMARY` | `DAILY` | `1_2`, `1_3` |
//! | Subscribers | `SUBSCRIBER` | `DETAILED` | `DAILY` | `1_2`, `1_3` |
//! | Pre-orders | `PRE_ORDER` | `SUMMARY` | any | `1_0` |
//! | Newsstand | `NEWSSTAND` | `DETAILED` | `DAILY`, `WEEKLY` | `1_0` |
//! | Offer code redemption | `SUBSCRIPTION_OFFER_CODE_REDEMPTION` | `SUMMARY` | `DAILY` | `1_0` |

mod finance;
mod sales;

pub use finance::{FinancesReportType, FinancesReportsFilter};
pub use sales::{
    FamilyRules, ReportFamily, SalesReportFrequency, SalesReportSubType, SalesReportType,
    SalesReportVersion, SalesReportsFilter,
};
