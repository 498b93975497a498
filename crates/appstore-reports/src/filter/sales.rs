use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::ValidationError;
use crate::transport::QueryParams;

const YEAR_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]");
const MONTH_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]");
const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesReportType {
    Sales,
    PreOrder,
    Newsstand,
    Subscription,
    SubscriptionEvent,
    SubscriptionOfferCodeRedemption,
    Subscriber,
}

impl SalesReportType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sales => "SALES",
            Self::PreOrder => "PRE_ORDER",
            Self::Newsstand => "NEWSSTAND",
            Self::Subscription => "SUBSCRIPTION",
            Self::SubscriptionEvent => "SUBSCRIPTION_EVENT",
            Self::SubscriptionOfferCodeRedemption => "SUBSCRIPTION_OFFER_CODE_REDEMPTION",
            Self::Subscriber => "SUBSCRIBER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesReportSubType {
    Summary,
    Detailed,
    OptIn,
}

impl SalesReportSubType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "SUMMARY",
            Self::Detailed => "DETAILED",
            Self::OptIn => "OPT_IN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesReportFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl SalesReportFrequency {
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Granularity of `filter[reportDate]` for this frequency.
    fn date_format(self) -> &'static [BorrowedFormatItem<'static>] {
        match self {
            Self::Yearly => YEAR_FORMAT,
            Self::Monthly => MONTH_FORMAT,
            Self::Daily | Self::Weekly => DAY_FORMAT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalesReportVersion {
    #[serde(rename = "1_0")]
    V1_0,
    #[serde(rename = "1_1")]
    V1_1,
    #[serde(rename = "1_2")]
    V1_2,
    #[serde(rename = "1_3")]
    V1_3,
}

impl SalesReportVersion {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_0 => "1_0",
            Self::V1_1 => "1_1",
            Self::V1_2 => "1_2",
            Self::V1_3 => "1_3",
        }
    }
}

macro_rules! display_as_str {
    ($($name:ty),+ $(,)?) => {
        $(
            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    SalesReportType,
    SalesReportSubType,
    SalesReportFrequency,
    SalesReportVersion,
);

/// Legal filter values for one report family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyRules {
    pub name: &'static str,
    pub report_type: SalesReportType,
    pub sub_types: &'static [SalesReportSubType],
    pub frequencies: &'static [SalesReportFrequency],
    pub versions: &'static [SalesReportVersion],
}

use SalesReportFrequency as Freq;
use SalesReportSubType as Sub;
use SalesReportVersion as Ver;

const SALES_RULES: FamilyRules = FamilyRules {
    name: "sales",
    report_type: SalesReportType::Sales,
    sub_types: &[Sub::Summary],
    frequencies: &Freq::ALL,
    versions: &[Ver::V1_0, Ver::V1_1],
};

const SUBSCRIPTIONS_RULES: FamilyRules = FamilyRules {
    name: "subscriptions",
    report_type: SalesReportType::Subscription,
    sub_types: &[Sub::Summary],
    frequencies: &[Freq::Daily],
    versions: &[Ver::V1_2, Ver::V1_3],
};

const SUBSCRIPTION_EVENTS_RULES: FamilyRules = FamilyRules {
    name: "subscription events",
    report_type: SalesReportType::SubscriptionEvent,
    sub_types: &[Sub::Summary],
    frequencies: &[Freq::Daily],
    versions: &[Ver::V1_2, Ver::V1_3],
};

const SUBSCRIBERS_RULES: FamilyRules = FamilyRules {
    name: "subscribers",
    report_type: SalesReportType::Subscriber,
    sub_types: &[Sub::Detailed],
    frequencies: &[Freq::Daily],
    versions: &[Ver::V1_2, Ver::V1_3],
};

const PRE_ORDERS_RULES: FamilyRules = FamilyRules {
    name: "pre-orders",
    report_type: SalesReportType::PreOrder,
    sub_types: &[Sub::Summary],
    frequencies: &Freq::ALL,
    versions: &[Ver::V1_0],
};

const NEWSSTAND_RULES: FamilyRules = FamilyRules {
    name: "newsstand",
    report_type: SalesReportType::Newsstand,
    sub_types: &[Sub::Detailed],
    frequencies: &[Freq::Daily, Freq::Weekly],
    versions: &[Ver::V1_0],
};

const OFFER_CODE_REDEMPTION_RULES: FamilyRules = FamilyRules {
    name: "subscription offer code redemption",
    report_type: SalesReportType::SubscriptionOfferCodeRedemption,
    sub_types: &[Sub::Summary],
    frequencies: &[Freq::Daily],
    versions: &[Ver::V1_0],
};

/// Report families served by `v1/salesReports`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFamily {
    Sales,
    Subscriptions,
    SubscriptionEvents,
    Subscribers,
    PreOrders,
    Newsstand,
    SubscriptionOfferCodeRedemption,
}

impl ReportFamily {
    pub const ALL: [Self; 7] = [
        Self::Sales,
        Self::Subscriptions,
        Self::SubscriptionEvents,
        Self::Subscribers,
        Self::PreOrders,
        Self::Newsstand,
        Self::SubscriptionOfferCodeRedemption,
    ];

    pub const fn rules(self) -> &'static FamilyRules {
        match self {
            Self::Sales => &SALES_RULES,
            Self::Subscriptions => &SUBSCRIPTIONS_RULES,
            Self::SubscriptionEvents => &SUBSCRIPTION_EVENTS_RULES,
            Self::Subscribers => &SUBSCRIBERS_RULES,
            Self::PreOrders => &PRE_ORDERS_RULES,
            Self::Newsstand => &NEWSSTAND_RULES,
            Self::SubscriptionOfferCodeRedemption => &OFFER_CODE_REDEMPTION_RULES,
        }
    }

    pub const fn report_type(self) -> SalesReportType {
        self.rules().report_type
    }
}

fn check_allowed<T: PartialEq>(
    value: Option<T>,
    allowed: &[T],
    field: &'static str,
    family: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if allowed.contains(&value) => Ok(()),
        _ => Err(ValidationError::FieldNotAllowed { field, family }),
    }
}

/// Filter for `v1/salesReports`.
///
/// Family constructors such as [`SalesReportsFilter::subscriptions`] pin the
/// report type and the rule set used by [`SalesReportsFilter::is_valid`]. A
/// filter built with [`SalesReportsFilter::new`] only gets the required-field
/// checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesReportsFilter {
    pub report_date: Option<Date>,
    pub report_sub_type: Option<SalesReportSubType>,
    pub report_type: Option<SalesReportType>,
    pub frequency: Option<SalesReportFrequency>,
    pub version: Option<SalesReportVersion>,
    family: Option<ReportFamily>,
}

impl SalesReportsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_family(family: ReportFamily) -> Self {
        Self {
            report_type: Some(family.report_type()),
            family: Some(family),
            ..Self::default()
        }
    }

    pub fn sales() -> Self {
        Self::for_family(ReportFamily::Sales)
    }

    pub fn subscriptions() -> Self {
        Self::for_family(ReportFamily::Subscriptions)
    }

    pub fn subscription_events() -> Self {
        Self::for_family(ReportFamily::SubscriptionEvents)
    }

    pub fn subscribers() -> Self {
        Self::for_family(ReportFamily::Subscribers)
    }

    pub fn pre_orders() -> Self {
        Self::for_family(ReportFamily::PreOrders)
    }

    pub fn newsstand() -> Self {
        Self::for_family(ReportFamily::Newsstand)
    }

    pub fn subscription_offer_code_redemption() -> Self {
        Self::for_family(ReportFamily::SubscriptionOfferCodeRedemption)
    }

    pub const fn family(&self) -> Option<ReportFamily> {
        self.family
    }

    pub fn set_report_date(mut self, value: Date) -> Self {
        self.report_date = Some(value);
        self
    }

    pub fn set_report_sub_type(mut self, value: SalesReportSubType) -> Self {
        self.report_sub_type = Some(value);
        self
    }

    pub fn sub_type_summary(self) -> Self {
        self.set_report_sub_type(SalesReportSubType::Summary)
    }

    pub fn sub_type_detailed(self) -> Self {
        self.set_report_sub_type(SalesReportSubType::Detailed)
    }

    pub fn sub_type_opt_in(self) -> Self {
        self.set_report_sub_type(SalesReportSubType::OptIn)
    }

    pub fn set_report_type(mut self, value: SalesReportType) -> Self {
        self.report_type = Some(value);
        self
    }

    pub fn type_sales(self) -> Self {
        self.set_report_type(SalesReportType::Sales)
    }

    pub fn type_pre_order(self) -> Self {
        self.set_report_type(SalesReportType::PreOrder)
    }

    pub fn type_newsstand(self) -> Self {
        self.set_report_type(SalesReportType::Newsstand)
    }

    pub fn type_subscription(self) -> Self {
        self.set_report_type(SalesReportType::Subscription)
    }

    pub fn type_subscription_event(self) -> Self {
        self.set_report_type(SalesReportType::SubscriptionEvent)
    }

    pub fn type_subscription_offer_code_redemption(self) -> Self {
        self.set_report_type(SalesReportType::SubscriptionOfferCodeRedemption)
    }

    pub fn type_subscriber(self) -> Self {
        self.set_report_type(SalesReportType::Subscriber)
    }

    pub fn set_frequency(mut self, value: SalesReportFrequency) -> Self {
        self.frequency = Some(value);
        self
    }

    pub fn daily(self) -> Self {
        self.set_frequency(SalesReportFrequency::Daily)
    }

    pub fn weekly(self) -> Self {
        self.set_frequency(SalesReportFrequency::Weekly)
    }

    pub fn monthly(self) -> Self {
        self.set_frequency(SalesReportFrequency::Monthly)
    }

    pub fn yearly(self) -> Self {
        self.set_frequency(SalesReportFrequency::Yearly)
    }

    pub fn set_version(mut self, value: SalesReportVersion) -> Self {
        self.version = Some(value);
        self
    }

    pub fn version_1_0(self) -> Self {
        self.set_version(SalesReportVersion::V1_0)
    }

    pub fn version_1_1(self) -> Self {
        self.set_version(SalesReportVersion::V1_1)
    }

    pub fn version_1_2(self) -> Self {
        self.set_version(SalesReportVersion::V1_2)
    }

    pub fn version_1_3(self) -> Self {
        self.set_version(SalesReportVersion::V1_3)
    }

    /// Required-field checks shared by every family.
    pub fn validate_base(&self) -> Result<(), ValidationError> {
        if self.report_type.is_none() {
            return Err(ValidationError::FieldRequired {
                field: "ReportType",
            });
        }
        if self.report_sub_type.is_none() {
            return Err(ValidationError::FieldRequired {
                field: "ReportSubType",
            });
        }
        if self.frequency.is_none() {
            return Err(ValidationError::FieldRequired { field: "Frequency" });
        }
        Ok(())
    }

    /// Base checks, then the family table in the order report type, sub-type,
    /// frequency, version. Stops at the first failure.
    pub fn validate_as(&self, family: ReportFamily) -> Result<(), ValidationError> {
        self.validate_base()?;

        let rules = family.rules();
        check_allowed(self.report_type, &[rules.report_type], "ReportType", rules.name)?;
        check_allowed(self.report_sub_type, rules.sub_types, "ReportSubType", rules.name)?;
        check_allowed(self.frequency, rules.frequencies, "Frequency", rules.name)?;
        check_allowed(self.version, rules.versions, "Version", rules.name)
    }

    pub fn is_valid(&self) -> Result<(), ValidationError> {
        match self.family {
            Some(family) => self.validate_as(family),
            None => self.validate_base(),
        }
    }

    pub fn to_query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        let mut put = |name: &str, value: Option<&str>| {
            if let Some(value) = value {
                query.insert(name.to_owned(), value.to_owned());
            }
        };
        put("filter[reportSubType]", self.report_sub_type.map(SalesReportSubType::as_str));
        put("filter[reportType]", self.report_type.map(SalesReportType::as_str));
        put("filter[frequency]", self.frequency.map(SalesReportFrequency::as_str));
        put("filter[version]", self.version.map(SalesReportVersion::as_str));

        if let Some(date) = self.report_date {
            let format = self
                .frequency
                .map_or(DAY_FORMAT, SalesReportFrequency::date_format);
            if let Ok(formatted) = date.format(format) {
                query.insert(String::from("filter[reportDate]"), formatted);
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn message(filter: &SalesReportsFilter) -> String {
        filter
            .is_valid()
            .expect_err("filter must be rejected")
            .to_string()
    }

    #[test]
    fn sales_filter_truth_table() {
        let valid = SalesReportsFilter::sales()
            .sub_type_summary()
            .daily()
            .version_1_0();
        assert!(valid.is_valid().is_ok());
        assert!(valid.clone().version_1_1().is_valid().is_ok());
        assert!(valid.clone().yearly().is_valid().is_ok());

        assert_eq!(message(&valid.clone().sub_type_detailed()), "ReportSubType is not valid");
        assert_eq!(message(&valid.clone().version_1_2()), "Version is not valid");
        assert_eq!(message(&valid.clone().type_subscriber()), "ReportType is not valid");

        let mut missing_version = valid;
        missing_version.version = None;
        assert_eq!(message(&missing_version), "Version is not valid");
    }

    #[test]
    fn subscribers_filter_requires_detailed_daily_recent_version() {
        let valid = SalesReportsFilter::subscribers()
            .sub_type_detailed()
            .daily()
            .version_1_2();
        assert!(valid.is_valid().is_ok());
        assert!(valid.clone().version_1_3().is_valid().is_ok());

        assert_eq!(message(&valid.clone().sub_type_summary()), "ReportSubType is not valid");
        assert_eq!(message(&valid.clone().weekly()), "Frequency is not valid");
        assert_eq!(message(&valid.clone().version_1_0()), "Version is not valid");
    }

    #[test]
    fn family_rules_table() {
        let cases = [
            (ReportFamily::Subscriptions, Sub::Summary, Freq::Daily, Ver::V1_3, true),
            (ReportFamily::Subscriptions, Sub::Summary, Freq::Weekly, Ver::V1_3, false),
            (ReportFamily::SubscriptionEvents, Sub::Summary, Freq::Daily, Ver::V1_2, true),
            (ReportFamily::SubscriptionEvents, Sub::Detailed, Freq::Daily, Ver::V1_2, false),
            (ReportFamily::PreOrders, Sub::Summary, Freq::Monthly, Ver::V1_0, true),
            (ReportFamily::PreOrders, Sub::Summary, Freq::Daily, Ver::V1_1, false),
            (ReportFamily::Newsstand, Sub::Detailed, Freq::Weekly, Ver::V1_0, true),
            (ReportFamily::Newsstand, Sub::Detailed, Freq::Monthly, Ver::V1_0, false),
            (ReportFamily::SubscriptionOfferCodeRedemption, Sub::Summary, Freq::Daily, Ver::V1_0, true),
            (ReportFamily::SubscriptionOfferCodeRedemption, Sub::Summary, Freq::Daily, Ver::V1_2, false),
        ];

        for (family, sub_type, frequency, version, expected) in cases {
            let filter = SalesReportsFilter::for_family(family)
                .set_report_sub_type(sub_type)
                .set_frequency(frequency)
                .set_version(version);
            assert_eq!(
                filter.is_valid().is_ok(),
                expected,
                "{family:?} {sub_type} {frequency} {version}"
            );
        }
    }

    #[test]
    fn checks_run_in_declared_order() {
        let filter = SalesReportsFilter::subscriptions()
            .type_sales()
            .sub_type_detailed()
            .weekly()
            .version_1_0();
        assert_eq!(message(&filter), "ReportType is not valid");

        let filter = SalesReportsFilter::subscriptions()
            .sub_type_detailed()
            .weekly()
            .version_1_0();
        assert_eq!(message(&filter), "ReportSubType is not valid");

        let filter = SalesReportsFilter::subscriptions()
            .sub_type_summary()
            .weekly()
            .version_1_0();
        assert_eq!(message(&filter), "Frequency is not valid");
    }

    #[test]
    fn base_checks_report_missing_fields_first() {
        assert_eq!(message(&SalesReportsFilter::new()), "ReportType is required");
        assert_eq!(message(&SalesReportsFilter::sales()), "ReportSubType is required");
        assert_eq!(
            message(&SalesReportsFilter::sales().sub_type_summary()),
            "Frequency is required"
        );
        let base = SalesReportsFilter::new().type_newsstand().sub_type_opt_in().monthly();
        assert!(base.is_valid().is_ok());
        assert!(base.validate_as(ReportFamily::Newsstand).is_err());
    }

    #[test]
    fn not_allowed_error_names_family() {
        let err = SalesReportsFilter::subscribers()
            .sub_type_summary()
            .daily()
            .is_valid()
            .expect_err("summary is not a subscriber sub-type");
        assert_eq!(
            err,
            ValidationError::FieldNotAllowed {
                field: "ReportSubType",
                family: "subscribers",
            }
        );
    }

    #[test]
    fn query_params_omit_unset_values() {
        let query = SalesReportsFilter::sales()
            .sub_type_summary()
            .daily()
            .to_query_params();
        assert_eq!(query.get("filter[reportType]").map(String::as_str), Some("SALES"));
        assert_eq!(query.get("filter[reportSubType]").map(String::as_str), Some("SUMMARY"));
        assert_eq!(query.get("filter[frequency]").map(String::as_str), Some("DAILY"));
        assert!(!query.contains_key("filter[version]"));
        assert!(!query.contains_key("filter[reportDate]"));
    }

    #[test]
    fn report_date_granularity_follows_frequency() {
        let day = date!(2020 - 10 - 05);
        let cases = [
            (Freq::Daily, "2020-10-05"),
            (Freq::Weekly, "2020-10-05"),
            (Freq::Monthly, "2020-10"),
            (Freq::Yearly, "2020"),
        ];
        for (frequency, expected) in cases {
            let query = SalesReportsFilter::sales()
                .set_frequency(frequency)
                .set_report_date(day)
                .to_query_params();
            assert_eq!(
                query.get("filter[reportDate]").map(String::as_str),
                Some(expected),
                "{frequency}"
            );
        }
    }
}
